// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::descriptor::ArgumentDescriptor;
use std::io;
use std::io::Write;

const PREAMBLE: &[&str] = &[
  "#!/usr/bin/env python",
  "'''",
  "'''",
  "# pylint: disable=missing-docstring",
  "import argparse",
  "import sys",
  "",
  "",
  "def parse_args(argv):",
  "    parser = argparse.ArgumentParser(description=__doc__)",
];

const PARSE_RETURN: &str = "    return parser.parse_args(argv)";

const ENTRY_POINT: &[&str] = &[
  "",
  "",
  "def main(argv):",
  "    args = parse_args(argv)",
  "",
  "",
  "if __name__ == '__main__':",
  "    sys.exit(main(sys.argv[1:]))",
  "",
];

/// Switches that shape the generated script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateOptions {
  /// Leave out `main` and the `__main__` guard.
  pub no_main: bool,
  /// Accepted for compatibility; no test script is produced either way.
  pub no_test: bool,
}

/// Renders the full text of a python script skeleton.
pub fn render_python(descriptors: &[ArgumentDescriptor], options: TemplateOptions) -> String {
  let mut lines: Vec<String> = PREAMBLE.iter().map(|line| line.to_string()).collect();
  lines.extend(descriptors.iter().map(ToString::to_string));
  lines.push(PARSE_RETURN.to_string());

  if !options.no_main {
    lines.extend(ENTRY_POINT.iter().map(|line| line.to_string()));
  }

  lines.join("\n")
}

/// Renders the script and writes it to `sink` in one go.
pub fn write_python<W: Write>(
  sink: &mut W,
  descriptors: &[ArgumentDescriptor],
  options: TemplateOptions,
) -> io::Result<()> {
  let text = render_python(descriptors, options);
  sink.write_all(text.as_bytes())?;
  sink.flush()
}
