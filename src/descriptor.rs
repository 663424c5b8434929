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
use crate::error::ScaffoldError;
use std::fmt;
use std::str::FromStr;

/// Separator between the fields of a raw descriptor.
pub const FIELD_SEPARATOR: char = ':';

/// Maximum number of fields: short, long, type, default.
pub const MAX_FIELDS: usize = 4;

/// One command-line argument to be registered in a generated script.
///
/// Built from a `SHORT:LONG:TYPE:DEFAULT` string. Trailing fields that
/// were not supplied are `None`; fields that were supplied but left
/// empty (e.g. the middle of `j::int`) are `Some("")` and are skipped
/// when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentDescriptor {
  pub short: Option<String>,
  pub long: Option<String>,
  pub ty: Option<String>,
  pub default: Option<String>,
}

impl ArgumentDescriptor {
  /// Returns true if either flag name would be emitted.
  pub fn has_flag(&self) -> bool {
    is_present(&self.short) || is_present(&self.long)
  }
}

fn is_present(field: &Option<String>) -> bool {
  field.as_deref().is_some_and(|s| !s.is_empty())
}

/// Whether a default value is dropped from the rendered fragment.
///
/// Empty strings and anything that reads as numeric zero (`0`, `0.0`,
/// `-0`) count as no default at all. Whitespace is significant.
pub fn is_falsy_default(value: &str) -> bool {
  value.is_empty() || value.parse::<f64>().is_ok_and(|n| n == 0.0)
}

impl FromStr for ArgumentDescriptor {
  type Err = ScaffoldError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut fields: Vec<Option<String>> = s
      .splitn(MAX_FIELDS + 1, FIELD_SEPARATOR)
      .map(|field| Some(field.to_string()))
      .collect();

    if fields.len() > MAX_FIELDS {
      return Err(ScaffoldError::MalformedDescriptor {
        descriptor: s.to_string(),
        fields: s.split(FIELD_SEPARATOR).count(),
      });
    }
    fields.resize(MAX_FIELDS, None);

    let mut fields = fields.into_iter();
    Ok(ArgumentDescriptor {
      short: fields.next().flatten(),
      long: fields.next().flatten(),
      ty: fields.next().flatten(),
      default: fields.next().flatten(),
    })
  }
}

/// Renders the `parser.add_argument(...)` registration for this argument.
impl fmt::Display for ArgumentDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut tokens: Vec<String> = [&self.short, &self.long]
      .into_iter()
      .filter_map(|name| name.as_deref())
      .filter(|name| !name.is_empty())
      .map(|name| format!("'{name}'"))
      .collect();

    if let Some(ty) = self.ty.as_deref().filter(|ty| !ty.is_empty()) {
      tokens.push(format!("type={ty}"));
    }
    if let Some(default) = self.default.as_deref().filter(|d| !is_falsy_default(d)) {
      tokens.push(format!("default={default}"));
    }

    writeln!(f, "    parser.add_argument(")?;
    writeln!(f, "        {}", tokens.join(", "))?;
    write!(f, "    )")
  }
}
