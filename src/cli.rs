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
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::builder::BoolishValueParser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Create templates for new scripts to save some time.")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Create template for a python script.
  Python(PythonArgs),
}

#[derive(Debug, Args)]
pub struct PythonArgs {
  /// Doesn't create main function.
  /// The env var takes true/false, 1/0, yes/no or on/off.
  #[arg(long, env = "SCAFFOLD_NO_MAIN", value_parser = BoolishValueParser::new())]
  pub no_main: bool,

  /// Doesn't create test script.
  #[arg(long)]
  pub no_test: bool,

  /// Arguments for the new script, one per flag.
  /// Example: -a j:job:int:4 -a v:verbose
  #[arg(short = 'a', long = "arg", value_name = "SHORT:LONG:TYPE:DEFAULT")]
  pub args: Vec<String>,

  /// Script name (w/o ext name).
  #[arg(value_name = "SCRIPT_NAME")]
  pub script_name: PathBuf,
}
