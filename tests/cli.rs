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
use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn scaffold() -> Command {
  let mut cmd = Command::new(cargo::cargo_bin!("scaffold"));
  cmd
    .env("CLICOLOR", "0")
    .env_remove("SCAFFOLD_NO_MAIN")
    .env_remove("SCAFFOLD_LOG_FILE")
    .env_remove("RUST_LOG");
  cmd
}

#[test]
fn test_python_with_argument() {
  let temp = tempdir().unwrap();
  let script = temp.path().join("tool.py");

  scaffold()
    .arg("python")
    .arg("-a")
    .arg("j:job:int:4")
    .arg(&script)
    .assert()
    .success()
    .stderr(predicate::str::contains("Script template written"));

  let text = fs::read_to_string(&script).unwrap();
  assert!(text.starts_with("#!/usr/bin/env python\n'''\n'''\n"));
  assert!(text.contains(
    "    parser.add_argument(\n        'j', 'job', type=int, default=4\n    )\n    return parser.parse_args(argv)"
  ));
  assert!(text.ends_with("if __name__ == '__main__':\n    sys.exit(main(sys.argv[1:]))\n"));
}

#[test]
fn test_python_arguments_keep_order() {
  let temp = tempdir().unwrap();
  let script = temp.path().join("tool.py");

  scaffold()
    .arg("python")
    .arg("--arg")
    .arg("j:job")
    .arg("-a")
    .arg("v:verbose")
    .arg(&script)
    .assert()
    .success();

  let text = fs::read_to_string(&script).unwrap();
  let job = text.find("'j', 'job'\n").unwrap();
  let verbose = text.find("'v', 'verbose'\n").unwrap();
  assert!(job < verbose);
}

#[test]
fn test_python_no_main() {
  let temp = tempdir().unwrap();
  let script = temp.path().join("lib.py");

  scaffold()
    .arg("python")
    .arg("--no-main")
    .arg(&script)
    .assert()
    .success();

  let text = fs::read_to_string(&script).unwrap();
  assert!(text.ends_with(
    "    parser = argparse.ArgumentParser(description=__doc__)\n    return parser.parse_args(argv)"
  ));
  assert!(!text.contains("def main"));
  assert!(!text.contains("__main__"));
}

#[test]
fn test_python_no_test_is_accepted() {
  let temp = tempdir().unwrap();
  let with_flag = temp.path().join("a.py");
  let without_flag = temp.path().join("b.py");

  scaffold()
    .args(["python", "--no-test", "-a", "o:out"])
    .arg(&with_flag)
    .assert()
    .success();
  scaffold()
    .args(["python", "-a", "o:out"])
    .arg(&without_flag)
    .assert()
    .success();

  assert_eq!(
    fs::read_to_string(&with_flag).unwrap(),
    fs::read_to_string(&without_flag).unwrap()
  );
}

#[test]
fn test_python_malformed_argument() {
  let temp = tempdir().unwrap();
  let script = temp.path().join("tool.py");

  scaffold()
    .arg("python")
    .arg("-a")
    .arg("a:b:c:d:e")
    .arg(&script)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Malformed argument descriptor 'a:b:c:d:e'"));

  assert!(!script.exists());
}

#[test]
fn test_python_unwritable_destination() {
  let temp = tempdir().unwrap();
  let script = temp.path().join("no_such_dir").join("tool.py");

  scaffold()
    .arg("python")
    .arg(&script)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to write script to"));
}

#[test]
fn test_python_requires_script_name() {
  scaffold()
    .arg("python")
    .assert()
    .failure()
    .stderr(predicate::str::contains("SCRIPT_NAME"));
}

#[test]
fn test_python_no_main_from_env() {
  let temp = tempdir().unwrap();

  for (value, has_main) in [
    ("true", false),
    ("1", false),
    ("yes", false),
    ("false", true),
    ("0", true),
  ] {
    let script = temp.path().join(format!("env_{value}.py"));

    scaffold()
      .env("SCAFFOLD_NO_MAIN", value)
      .arg("python")
      .arg(&script)
      .assert()
      .success();

    let text = fs::read_to_string(&script).unwrap();
    assert_eq!(text.contains("def main"), has_main, "SCAFFOLD_NO_MAIN={value}");
  }
}

#[test]
fn test_log_file_from_env() {
  let temp = tempdir().unwrap();
  let script = temp.path().join("tool.py");

  scaffold()
    .current_dir(temp.path())
    .env("SCAFFOLD_LOG_FILE", "scaffold.log")
    .arg("python")
    .arg(&script)
    .assert()
    .success()
    .stderr(predicate::str::contains("Script template written").not());

  let log = fs::read_to_string(temp.path().join("scaffold.log")).unwrap();
  assert!(log.contains("Script template written"));
  assert!(script.exists());
}
