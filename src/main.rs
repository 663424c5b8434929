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
use Commands::Python;
use anyhow::Result;
use clap::Parser;
use scaffold::cli::Cli;
use scaffold::cli::Commands;
use scaffold::config::GenerationRequest;
use scaffold::logging::setup_tracing;

fn main() -> Result<()> {
  let _log_guard = setup_tracing()?;

  let Cli { command } = Cli::parse();
  let main_span = tracing::info_span!("scaffold");
  let _enter = main_span.enter();

  match command {
    Python(python_args) => {
      tracing::debug!(script = %python_args.script_name.display(), "Creating python script template");

      let request = GenerationRequest::try_from(python_args)?;

      request.generate()?;
    }
  }

  Ok(())
}
