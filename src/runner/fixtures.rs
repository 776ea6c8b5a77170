//! 场景文件加载
//!
//! 支持 `.json`、`.yaml`、`.yml`，内容为场景数组。

use crate::models::Scenario;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("读取场景文件失败 {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析 JSON 场景失败 {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("解析 YAML 场景失败 {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("不支持的场景文件格式: {0:?}")]
    UnsupportedFormat(PathBuf),
}

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, FixtureError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let is_yaml = match extension.as_deref() {
        Some("json") => false,
        Some("yaml") | Some("yml") => true,
        _ => return Err(FixtureError::UnsupportedFormat(path.to_path_buf())),
    };

    let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|source| FixtureError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(&content).map_err(|source| FixtureError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_scenarios() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenarios.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "基础对话", "prompt": "你好", "keywords": ["你好"]},
                {"name": "流式", "prompt": "count", "stream": true, "keywords": []}
            ]"#,
        )
        .unwrap();

        let scenarios = load_scenarios(&path).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert!(!scenarios[0].stream);
        assert!(scenarios[1].stream);
        assert!(scenarios[1].tools.is_empty());
    }

    #[test]
    fn test_load_yaml_scenarios() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenarios.yml");
        std::fs::write(
            &path,
            "- name: 工具调用\n  prompt: 北京天气\n  tools:\n    - name: get_weather\n      input_schema:\n        type: object\n  keywords: [北京]\n",
        )
        .unwrap();

        let scenarios = load_scenarios(&path).unwrap();
        assert_eq!(scenarios[0].tools.len(), 1);
        assert_eq!(scenarios[0].tools[0]["name"], "get_weather");
        assert_eq!(scenarios[0].keywords, vec!["北京".to_string()]);
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            load_scenarios(Path::new("scenarios.toml")),
            Err(FixtureError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_scenarios(Path::new("/nonexistent/scenarios.json")),
            Err(FixtureError::Io { .. })
        ));
    }
}
