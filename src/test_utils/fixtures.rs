//! Multi-file YAML document sets for tests
//!
//! Each fixture is a small tree of documents linked by `$ref` lines, plus the
//! resolved text expected for its root (when resolution is supposed to
//! succeed).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A set of YAML documents rooted at one entry file
#[derive(Clone, Debug)]
pub struct DocumentFixture {
    pub name: String,
    /// Root document, relative to the fixture directory
    pub root: String,
    /// `(relative path, content)` for every document
    pub files: Vec<(String, String)>,
    /// Resolved text of `root`, if resolution succeeds
    pub expected: Option<String>,
}

fn file(path: &str, content: &str) -> (String, String) {
    (path.to_string(), content.to_string())
}

impl DocumentFixture {
    /// A mapping value pulled in from a sibling file
    pub fn simple() -> Self {
        Self {
            name: "simple".to_string(),
            root: "parent.yaml".to_string(),
            files: vec![
                file("parent.yaml", "name: Nana\nage: 75\nchild:\n  $ref: child.yaml\n"),
                file("child.yaml", "name: Michael\nage: 58\n"),
            ],
            expected: Some("name: Nana\nage: 75\nchild:\n  name: Michael\n  age: 58".to_string()),
        }
    }

    /// Sequence items pulled in with `- $ref:`
    pub fn simple_array() -> Self {
        Self {
            name: "simple_array".to_string(),
            root: "parent.yaml".to_string(),
            files: vec![
                file(
                    "parent.yaml",
                    "name: Nana\nage: 75\nchildren:\n- $ref: michael.yaml\n- $ref: bev.yaml\n",
                ),
                file("michael.yaml", "name: Michael\nage: 58\n"),
                file("bev.yaml", "name: Bev\nage: 55\n"),
            ],
            expected: Some(
                "name: Nana\nage: 75\nchildren:\n- name: Michael\n  age: 58\n- name: Bev\n  age: 55"
                    .to_string(),
            ),
        }
    }

    /// Four generations spread over sibling directories, with the same
    /// documents included from two different branches
    pub fn family() -> Self {
        let gen3_children =
            "- $ref: ../gen3/michael.yaml\n- $ref: ../gen3/bev.yaml\n- $ref: ../gen3/carol.yaml\n";

        Self {
            name: "family".to_string(),
            root: "gen1/grandNana.yaml".to_string(),
            files: vec![
                file(
                    "gen1/grandNana.yaml",
                    "name: Grand Nana\nage: 92\nchildren:\n- $ref: ../gen2/nana.yaml\n",
                ),
                file(
                    "gen2/nana.yaml",
                    &format!(
                        "name: Nana\nage: 75\nhusband:\n  $ref: pops.yaml\nchildren:\n{gen3_children}"
                    ),
                ),
                file("gen2/pops.yaml", &format!("name: Pops\nage: 80\nchildren:\n{gen3_children}")),
                file(
                    "gen3/michael.yaml",
                    "name: Michael\nage: 59\nchildren:\n\
                     - $ref: ../gen4/chris.yaml\n\
                     - $ref: ../gen4/erin.yaml\n\
                     - $ref: ../gen4/sally.yaml\n\
                     - $ref: ../gen4/elizabeth.yaml\n",
                ),
                file("gen3/bev.yaml", "name: Bev\nage: null\n"),
                file("gen3/carol.yaml", "name: Carol\nage: null\n"),
                file("gen4/chris.yaml", "name: Chris\nage: 30\n"),
                file("gen4/erin.yaml", "name: Erin\nage: 26\n"),
                file("gen4/sally.yaml", "name: Sally\nage: 21\n"),
                file("gen4/elizabeth.yaml", "name: Elizabeth\nage: 21\n"),
            ],
            expected: Some(
                r#"name: Grand Nana
age: 92
children:
- name: Nana
  age: 75
  husband:
    name: Pops
    age: 80
    children:
    - name: Michael
      age: 59
      children:
      - name: Chris
        age: 30
      - name: Erin
        age: 26
      - name: Sally
        age: 21
      - name: Elizabeth
        age: 21
    - name: Bev
      age: null
    - name: Carol
      age: null
  children:
  - name: Michael
    age: 59
    children:
    - name: Chris
      age: 30
    - name: Erin
      age: 26
    - name: Sally
      age: 21
    - name: Elizabeth
      age: 21
  - name: Bev
    age: null
  - name: Carol
    age: null"#
                    .to_string(),
            ),
        }
    }

    /// An API description split into paths and definitions, mixing file
    /// references with in-document anchors and commented-out references
    pub fn openapi() -> Self {
        Self {
            name: "openapi".to_string(),
            root: "index.yaml".to_string(),
            files: vec![
                file(
                    "index.yaml",
                    r#"swagger: '2.0'
info:
  title: Case Service API
  version: v1
schemes:
  - https

paths:
  /cases:
    $ref: "./paths/cases.yaml"

definitions:
  complete_case:
    $ref: './definitions/complete_case.yaml'
"#,
                ),
                file(
                    "paths/cases.yaml",
                    r#"x-swagger-router-controller: case
get:
  operationId: getCase
  responses:
    200:
      description: The returned case
      schema:
        $ref: '#/definitions/complete_case'
      # examples:
      #     $ref: 'responses/examples/complete_case.example.yaml'
"#,
                ),
                file(
                    "definitions/complete_case.yaml",
                    r#"required: [id]
properties:
  id:
    $ref: ../shared/id.yaml
"#,
                ),
                file("shared/id.yaml", "type: string\nformat: uuid\n"),
            ],
            expected: Some(
                r#"swagger: '2.0'
info:
  title: Case Service API
  version: v1
schemes:
  - https

paths:
  /cases:
    x-swagger-router-controller: case
    get:
      operationId: getCase
      responses:
        200:
          description: The returned case
          schema:
            $ref: '#/definitions/complete_case'
          # examples:
          #     $ref: 'responses/examples/complete_case.example.yaml'

definitions:
  complete_case:
    required: [id]
    properties:
      id:
        type: string
        format: uuid"#
                    .to_string(),
            ),
        }
    }

    /// Two documents referencing each other through a third
    pub fn circular() -> Self {
        Self {
            name: "circular".to_string(),
            root: "parent.yaml".to_string(),
            files: vec![
                file("parent.yaml", "name: parent\nchild:\n  $ref: child.yaml\n"),
                file("child.yaml", "name: child\ngrandchild:\n  $ref: grandchild.yaml\n"),
                file("grandchild.yaml", "name: grandchild\nloop:\n  $ref: ./parent.yaml\n"),
            ],
            expected: None,
        }
    }

    /// A reference to a document that does not exist
    pub fn bad_reference() -> Self {
        Self {
            name: "bad_reference".to_string(),
            root: "fileWithBadReference.yaml".to_string(),
            files: vec![file(
                "fileWithBadReference.yaml",
                "name: broken\nchild:\n  $ref: ./doesNotExist.yaml\n",
            )],
            expected: None,
        }
    }

    /// Write every document below `dir` and return the root path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        for (relative, content) in &self.files {
            let path = dir.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        }
        Ok(dir.join(&self.root))
    }
}
