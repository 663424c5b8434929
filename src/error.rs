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
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error enum for the scaffold library.
#[derive(Error, Debug)]
pub enum ScaffoldError {
  /// A `-a` value split into more than four colon-delimited fields.
  #[error(
    "Malformed argument descriptor '{descriptor}': expected at most 4 fields (SHORT:LONG:TYPE:DEFAULT), got {fields}"
  )]
  MalformedDescriptor { descriptor: String, fields: usize },

  #[error("Failed to write script to {path}")]
  SinkWrite {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Result type alias for scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
