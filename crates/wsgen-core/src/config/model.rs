use crate::error::{Result, WorksheetError};
use crate::template::{
    Delimiters, Syntax, SyntaxPreset, TemplateEngine, UndefinedBehavior,
};
use crate::worksheet::{WorksheetOptions, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Conventional configuration file name
pub const CONFIG_FILE_NAME: &str = "worksheet.toml";

/// worksheet.toml schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorksheetConfig {
    /// Seed for reproducible problem variables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub worksheet: WorksheetSection,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub problems: Vec<ProblemSpec>,
}

/// `[worksheet]` table; unset fields keep the [`WorksheetOptions`] defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_problems: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_solutions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lhead: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chead: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhead: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lfoot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfoot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfoot: Option<String>,
}

impl WorksheetSection {
    /// Apply the configured fields over the defaults for `preset`
    ///
    /// `lhead` falls back to the configured title.
    pub fn to_options(&self, preset: SyntaxPreset) -> WorksheetOptions {
        let title = self.title.as_deref().unwrap_or(DEFAULT_TITLE);
        let mut options = WorksheetOptions::for_preset(title, preset);

        if let Some(template) = &self.template {
            options.template = template.clone();
        }
        if let Some(render_problems) = self.render_problems {
            options.render_problems = render_problems;
        }
        if let Some(render_solutions) = self.render_solutions {
            options.render_solutions = render_solutions;
        }

        for (field, value) in [
            (&mut options.lhead, &self.lhead),
            (&mut options.chead, &self.chead),
            (&mut options.rhead, &self.rhead),
            (&mut options.lfoot, &self.lfoot),
            (&mut options.cfoot, &self.cfoot),
            (&mut options.rfoot, &self.rfoot),
        ] {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        options
    }
}

/// `[engine]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub syntax: SyntaxPreset,
    #[serde(default)]
    pub undefined: UndefinedBehavior,
    /// Directories searched for document templates, relative to the config file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template_dirs: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiters: Option<DelimiterOverrides>,
}

/// `[engine.delimiters]`: `[start, end]` pairs replacing the preset's
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<(String, String)>,
}

impl EngineConfig {
    /// Preset delimiters with any overrides applied
    pub fn syntax(&self) -> Result<Syntax> {
        let preset = self.syntax.syntax();
        let Some(overrides) = &self.delimiters else {
            return Ok(preset);
        };

        let pick = |custom: &Option<(String, String)>, default: &Delimiters| match custom {
            Some((start, end)) => Delimiters::new(start.clone(), end.clone()),
            None => default.clone(),
        };

        Syntax::new(
            pick(&overrides.variable, preset.variable()),
            pick(&overrides.block, preset.block()),
            pick(&overrides.comment, preset.comment()),
        )
        .map_err(|e| WorksheetError::invalid_value("engine.delimiters", e.to_string()))
    }

    /// Build the engine; relative template directories resolve against `base_dir`
    ///
    /// `base_dir` itself is searched last, so document templates can be named
    /// relative to the config file.
    pub fn build_engine(&self, base_dir: &Path) -> Result<TemplateEngine> {
        let mut builder = TemplateEngine::builder()
            .syntax(self.syntax()?)
            .undefined(self.undefined);

        for dir in &self.template_dirs {
            builder = builder.search_path(resolve_path(base_dir, dir));
        }
        builder = builder.search_path(base_dir);

        if let Some(secs) = self.render_timeout_secs {
            if secs == 0 {
                return Err(WorksheetError::invalid_value(
                    "engine.render_timeout_secs",
                    "must be greater than zero",
                ));
            }
            builder = builder.render_timeout(Duration::from_secs(secs));
        }

        Ok(builder.build()?)
    }
}

/// One `[[problems]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemSpec {
    /// Registered problem kind, e.g. `arranging-letters`
    pub kind: String,
    pub title: String,
    /// Problem template path, relative to the config file
    pub template: PathBuf,
    /// How many independently randomized copies to add
    #[serde(default = "default_count")]
    pub count: usize,
    /// Fixed variables (static problems)
    #[serde(default, skip_serializing_if = "toml::Table::is_empty")]
    pub vars: toml::Table,
}

fn default_count() -> usize {
    1
}

impl ProblemSpec {
    pub fn new(
        kind: impl Into<String>,
        title: impl Into<String>,
        template: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
            template: template.into(),
            count: default_count(),
            vars: toml::Table::new(),
        }
    }

    /// Template path resolved against `base_dir`
    pub fn template_path(&self, base_dir: &Path) -> PathBuf {
        resolve_path(base_dir, &self.template)
    }
}

impl WorksheetConfig {
    /// Load and validate a worksheet.toml file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WorksheetError::ConfigParseError(format!("{}: {}", path.display(), e))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded {} with {} problem entries",
            path.display(),
            config.problems.len()
        );
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| WorksheetError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write this configuration as TOML
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WorksheetError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content)?;

        Ok(())
    }

    /// Checks serde cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.worksheet.title {
            if title.trim().is_empty() {
                return Err(WorksheetError::invalid_value(
                    "worksheet.title",
                    "must not be empty",
                ));
            }
        }

        for (i, spec) in self.problems.iter().enumerate() {
            if spec.kind.trim().is_empty() {
                return Err(WorksheetError::invalid_value(
                    format!("problems[{}].kind", i),
                    "must not be empty",
                ));
            }
            if spec.title.trim().is_empty() {
                return Err(WorksheetError::invalid_value(
                    format!("problems[{}].title", i),
                    "must not be empty",
                ));
            }
            if spec.count == 0 {
                return Err(WorksheetError::invalid_value(
                    format!("problems[{}].count", i),
                    "must be at least 1",
                ));
            }
        }

        self.engine.syntax()?;
        Ok(())
    }

    /// Directory relative paths in a config file at `config_path` resolve against
    pub fn base_dir(config_path: &Path) -> PathBuf {
        match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
