use super::*;
use std::{env, ffi::OsString};

const LOGS_DIR_KEY: &str = "LOGS_DIR";

pub fn get_logs_dir() -> OsString {
    self::get_env_variable(LOGS_DIR_KEY)
        .map(OsString::from)
        .or_else(|_| env::current_dir().map(|dir| dir.into_os_string()))
        .unwrap_or_else(|_| OsString::from("."))
}

pub fn get_env_variable(var_name: &str) -> Result<String, Box<dyn Error>> {
    env::var(var_name).map_err(|_| format!("Environment variable {} not set", var_name).into())
}

/// Overwrites `var_name` in the process environment.
///
/// The environment is process-global: call this before spawning threads that
/// read it.
pub fn set_env_variable(var_name: &str, value: &str) {
    unsafe {
        env::set_var(var_name, value);
    }
}

pub fn remove_env_variable(var_name: &str) {
    unsafe {
        env::remove_var(var_name);
    }
}

pub fn get_hostname() -> String {
    hostname::get()
        .unwrap_or_else(|_| OsString::from("localhost"))
        .to_string_lossy()
        .into_owned()
}
