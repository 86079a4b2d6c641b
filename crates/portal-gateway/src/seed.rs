//! Built-in demo mappings, loaded with `--seed-demo`.

use portal_core::Format;
use portal_loader::Source;

pub const DEMO_MAPPINGS: [(&str, &str); 2] = [
    ("/golang", "https://github.com/hauntarl/golang"),
    (
        "/gophercises",
        "https://courses.calhoun.io/courses/cor_gophercises",
    ),
];

pub const DEMO_YAML: &str = "
- path: /yaml
  url: https://pkg.go.dev/gopkg.in/yaml.v2?tab=doc
- path: /yaml_github
  url: https://github.com/go-yaml/yaml
";

pub const DEMO_JSON: &str = r#"
[
    {"path": "/json", "url": "https://pkg.go.dev/encoding/json?tab=doc"},
    {"path": "/json_intro", "url": "https://blog.golang.org/json"}
]
"#;

pub fn demo_mappings() -> Source {
    Source::mappings("demo-mappings", DEMO_MAPPINGS)
}

pub fn demo_yaml() -> Source {
    Source::inline("demo-yaml", Format::Yaml, DEMO_YAML)
}

pub fn demo_json() -> Source {
    Source::inline("demo-json", Format::Json, DEMO_JSON)
}
