use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use scout_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn sample_toml(mutate: impl FnOnce(&mut toml::Table)) -> String {
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let root = value.as_table_mut().expect("Template config must be a table.");

	mutate(root);

	toml::to_string(&value).expect("Failed to serialize config.")
}

fn write_config(contents: &str) -> PathBuf {
	let stamp = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("Clock went backwards.")
		.as_nanos();
	let counter = FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
	let path = env::temp_dir().join(format!("scout_config_{stamp}_{counter}.toml"));

	fs::write(&path, contents).expect("Failed to write config file.");

	path
}

fn set_backend(root: &mut toml::Table, key: &str, value: Value) {
	root.get_mut("backend")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [backend].")
		.insert(key.to_string(), value);
}

fn set_pagination(root: &mut toml::Table, key: &str, value: Value) {
	root.get_mut("pagination")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [pagination].")
		.insert(key.to_string(), value);
}

#[test]
fn loads_sample_config() {
	let path = write_config(SAMPLE_CONFIG_TEMPLATE_TOML);
	let cfg = scout_config::load(&path).expect("Failed to load sample config.");

	assert_eq!(cfg.backend.api_base, "http://localhost:8000");
	assert_eq!(cfg.pagination.combined_initial, 5);
	assert_eq!(cfg.pagination.source_page_size, 8);

	fs::remove_file(path).ok();
}

#[test]
fn pagination_section_is_optional() {
	let raw = sample_toml(|root| {
		root.remove("pagination");
	});
	let path = write_config(&raw);
	let cfg = scout_config::load(&path).expect("Failed to load config without pagination.");

	assert_eq!(cfg.pagination.combined_initial, 5);
	assert_eq!(cfg.pagination.combined_step, 5);
	assert_eq!(cfg.pagination.source_page_size, 8);

	fs::remove_file(path).ok();
}

#[test]
fn normalize_trims_trailing_slash() {
	let raw = sample_toml(|root| {
		set_backend(root, "api_base", Value::String("http://localhost:8000/".to_string()));
	});
	let path = write_config(&raw);
	let cfg = scout_config::load(&path).expect("Failed to load config.");

	assert_eq!(cfg.backend.api_base, "http://localhost:8000");

	fs::remove_file(path).ok();
}

#[test]
fn rejects_zero_timeout() {
	let raw = sample_toml(|root| {
		set_backend(root, "timeout_ms", Value::Integer(0));
	});
	let path = write_config(&raw);
	let result = scout_config::load(&path);

	assert!(matches!(result, Err(Error::Validation { .. })));

	fs::remove_file(path).ok();
}

#[test]
fn rejects_non_http_api_base() {
	let raw = sample_toml(|root| {
		set_backend(root, "api_base", Value::String("localhost:8000".to_string()));
	});
	let path = write_config(&raw);
	let result = scout_config::load(&path);

	assert!(matches!(result, Err(Error::Validation { .. })));

	fs::remove_file(path).ok();
}

#[test]
fn rejects_zero_page_size() {
	let raw = sample_toml(|root| {
		set_pagination(root, "source_page_size", Value::Integer(0));
	});
	let path = write_config(&raw);
	let result = scout_config::load(&path);

	assert!(matches!(result, Err(Error::Validation { .. })));

	fs::remove_file(path).ok();
}

#[test]
fn validate_accepts_defaults() {
	let cfg: Config =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");

	scout_config::validate(&cfg).expect("Sample config must validate.");
}
