use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub global: Global,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub ask: Ask,
    #[serde(default)]
    pub llm: Llm,
    #[serde(default)]
    pub split: Split,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Global {
    pub print_summary: bool,
}
impl Default for Global {
    fn default() -> Self {
        Self {
            print_summary: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    pub index_pdf: String,
    /// Optional dotenv file holding the API key. Missing file is fine.
    pub env_file: String,
}
impl Default for Paths {
    fn default() -> Self {
        Self {
            index_pdf: "book/index.pdf".into(),
            env_file: ".env".into(),
        }
    }
}

impl Paths {
    /// A relative `index_pdf` is anchored at `base_dir`, the directory holding the binary.
    pub fn index_pdf_path(&self, base_dir: &Path) -> PathBuf {
        let p = Path::new(&self.index_pdf);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            base_dir.join(p)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ask {
    pub question: String,
}
impl Default for Ask {
    fn default() -> Self {
        Self {
            question: "What is metabolism?".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Llm {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub api_key_env: String,
    /// 0 keeps the HTTP client's default.
    pub timeout_seconds: u64,
}
impl Default for Llm {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".into(),
            model: "llama-3.1-8b-instant".into(),
            temperature: 0.5,
            max_tokens: 1000,
            api_key_env: "GROQ_API_KEY".into(),
            timeout_seconds: 0,
        }
    }
}
impl Llm {
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Split {
    pub input_pdf: String,
    pub start_page: u32,
    pub end_page: u32,
    pub output_pdf: String,
}
impl Default for Split {
    fn default() -> Self {
        Self {
            input_pdf: "../assets/AnatomyAndPhysiology-LR.pdf".into(),
            start_page: 419,
            end_page: 479,
            output_pdf: "chapter_11.pdf".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub level: String,
    pub json: bool,
    pub write_to_file: bool,
    pub file_path: String,
}
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            write_to_file: false,
            file_path: "chapter-router.log".into(),
        }
    }
}
