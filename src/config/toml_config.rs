use crate::core::SessionSettings;
use crate::domain::model::Operation;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// A roster script: optional settings plus the ordered steps to run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    #[serde(default)]
    pub settings: ScriptSettings,
    #[serde(default)]
    pub steps: Vec<Operation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptSettings {
    pub legacy_grade_echo: Option<bool>,
    pub format: Option<String>,
}

impl ScriptConfig {
    /// Load a script from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a script from a TOML string after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_number("steps", self.steps.len(), 1)?;

        if let Some(format) = &self.settings.format {
            validation::validate_one_of("settings.format", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }

    pub fn format(&self) -> Option<&str> {
        self.settings.format.as_deref()
    }
}

impl SessionSettings for ScriptConfig {
    fn legacy_grade_echo(&self) -> bool {
        self.settings.legacy_grade_echo.unwrap_or(false)
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::StudentId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_script() {
        let toml_content = r#"
[settings]
legacy_grade_echo = true

[[steps]]
op = "add_student"
name = "Alex"
id = 1

[[steps]]
op = "add_grade"
id = 1
grade = 85

[[steps]]
op = "view_student"
id = 1

[[steps]]
op = "list_students"
"#;

        let config = ScriptConfig::from_toml_str(toml_content).unwrap();

        assert!(config.legacy_grade_echo());
        assert_eq!(config.steps.len(), 4);
        assert_eq!(
            config.steps[0],
            Operation::AddStudent {
                name: "Alex".to_string(),
                id: StudentId(1)
            }
        );
        assert_eq!(
            config.steps[1],
            Operation::AddGrade {
                id: StudentId(1),
                grade: 85.0
            }
        );
        assert_eq!(config.steps[3], Operation::ListStudents);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_settings_default() {
        let config = ScriptConfig::from_toml_str(
            "[[steps]]\nop = \"view_student\"\nid = 3\n",
        )
        .unwrap();
        assert!(!config.legacy_grade_echo());
        assert_eq!(config.format(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROSTER_TEST_STUDENT", "Jordan");

        let toml_content = r#"
[[steps]]
op = "add_student"
name = "${ROSTER_TEST_STUDENT}"
id = 4

[[steps]]
op = "add_student"
name = "${ROSTER_TEST_UNSET_VARIABLE}"
id = 5
"#;

        let config = ScriptConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.steps[0],
            Operation::AddStudent {
                name: "Jordan".to_string(),
                id: StudentId(4)
            }
        );
        assert_eq!(
            config.steps[1],
            Operation::AddStudent {
                name: "${ROSTER_TEST_UNSET_VARIABLE}".to_string(),
                id: StudentId(5)
            }
        );

        std::env::remove_var("ROSTER_TEST_STUDENT");
    }

    #[test]
    fn test_empty_script_fails_validation() {
        let config = ScriptConfig::from_toml_str("[settings]\nlegacy_grade_echo = false\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_fails_validation() {
        let toml_content = r#"
[settings]
format = "xml"

[[steps]]
op = "list_students"
"#;
        let config = ScriptConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RosterError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_unknown_operation_is_a_parse_error() {
        let err = ScriptConfig::from_toml_str("[[steps]]\nop = \"delete_student\"\nid = 1\n")
            .unwrap_err();
        assert!(matches!(err, RosterError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_script_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[steps]]\nop = \"add_student\"\nname = \"Sam\"\nid = 2\n")
            .unwrap();

        let config = ScriptConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.steps.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScriptConfig::from_file("/definitely/not/here/roster.toml").unwrap_err();
        assert!(matches!(err, RosterError::IoError(_)));
    }
}
