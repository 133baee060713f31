mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Backend, Config, Pagination, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn normalize(cfg: &mut Config) {
	while cfg.backend.api_base.ends_with('/') {
		cfg.backend.api_base.pop();
	}
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.backend.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "backend.api_base must be non-empty.".to_string(),
		});
	}
	if !cfg.backend.api_base.starts_with("http://")
		&& !cfg.backend.api_base.starts_with("https://")
	{
		return Err(Error::Validation {
			message: "backend.api_base must start with http:// or https://.".to_string(),
		});
	}
	if cfg.backend.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "backend.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.pagination.combined_initial == 0 {
		return Err(Error::Validation {
			message: "pagination.combined_initial must be greater than zero.".to_string(),
		});
	}
	if cfg.pagination.combined_step == 0 {
		return Err(Error::Validation {
			message: "pagination.combined_step must be greater than zero.".to_string(),
		});
	}
	if cfg.pagination.source_page_size == 0 {
		return Err(Error::Validation {
			message: "pagination.source_page_size must be greater than zero.".to_string(),
		});
	}

	Ok(())
}
