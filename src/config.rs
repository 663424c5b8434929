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
use crate::cli::PythonArgs;
use crate::descriptor::ArgumentDescriptor;
use crate::error::Result;
use crate::error::ScaffoldError;
use crate::template::TemplateOptions;
use crate::template::write_python;
use std::fs::File;
use std::path::PathBuf;

/// A fully parsed `scaffold python` invocation.
#[derive(Debug)]
pub struct GenerationRequest {
  pub script_name: PathBuf,
  pub descriptors: Vec<ArgumentDescriptor>,
  pub options: TemplateOptions,
}

impl TryFrom<PythonArgs> for GenerationRequest {
  type Error = ScaffoldError;

  fn try_from(
    PythonArgs {
      no_main,
      no_test,
      args,
      script_name,
    }: PythonArgs,
  ) -> Result<Self> {
    let descriptors = args
      .iter()
      .map(|raw| -> Result<ArgumentDescriptor> {
        let descriptor: ArgumentDescriptor = raw.parse()?;
        tracing::debug!(raw = %raw, ?descriptor, "Parsed argument descriptor");
        if !descriptor.has_flag() {
          tracing::warn!(raw = %raw, "Argument has neither a short nor a long name");
        }
        Ok(descriptor)
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(GenerationRequest {
      script_name,
      descriptors,
      options: TemplateOptions { no_main, no_test },
    })
  }
}

impl GenerationRequest {
  /// Creates (or truncates) the destination and writes the script into it.
  pub fn generate(&self) -> Result<()> {
    if self.options.no_test {
      tracing::debug!("--no-test has no effect: no test script is generated");
    }

    let sink_error = |source| ScaffoldError::SinkWrite {
      path: self.script_name.clone(),
      source,
    };

    let mut file = File::create(&self.script_name).map_err(sink_error)?;
    write_python(&mut file, &self.descriptors, self.options).map_err(sink_error)?;

    tracing::info!(
      path = %self.script_name.display(),
      arguments = self.descriptors.len(),
      "Script template written"
    );
    Ok(())
  }
}
