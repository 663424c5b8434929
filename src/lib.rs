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

//! # Scaffold
//!
//! `scaffold` writes boilerplate for new scripts: a standard preamble, an
//! argument parser setup and, optionally, an entry-point function.
//!
//! Arguments of the generated script are described with a compact
//! `SHORT:LONG:TYPE:DEFAULT` string, e.g. `j:job:int:4`.
//!
//! ## Core Modules
//!
//! * [`descriptor`]: Parses `SHORT:LONG:TYPE:DEFAULT` strings into
//!   `ArgumentDescriptor`s and renders each one as a parser registration.
//! * [`template`]: Assembles the full script text and writes it to a sink.
//! * [`config`]: Turns parsed CLI flags into a `GenerationRequest` and
//!   writes the requested file.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod template;
