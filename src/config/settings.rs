use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_MEMPOOL_DIR: &str = "./mempool";
static DEFAULT_OUTPUT_FILE: &str = "output.txt";

const MEMPOOL_DIR_KEY: &str = "MEMPOOL_DIR";
const OUTPUT_FILE_KEY: &str = "OUTPUT_FILE";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut mempool_dir = String::from(DEFAULT_MEMPOOL_DIR);
        if let Ok(dir) = env::var(MEMPOOL_DIR_KEY) {
            mempool_dir = dir;
        }

        let mut output_file = String::from(DEFAULT_OUTPUT_FILE);
        if let Ok(path) = env::var(OUTPUT_FILE_KEY) {
            output_file = path;
        }

        let mut map = HashMap::new();
        map.insert(String::from(MEMPOOL_DIR_KEY), mempool_dir);
        map.insert(String::from(OUTPUT_FILE_KEY), output_file);

        Config {
            inner: RwLock::new(map),
        }
    }

    pub fn get_mempool_dir(&self) -> String {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(MEMPOOL_DIR_KEY)
            .expect("Mempool directory should always be present in config")
            .clone()
    }

    pub fn set_mempool_dir(&self, dir: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(MEMPOOL_DIR_KEY), dir);
    }

    pub fn get_output_file(&self) -> String {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(OUTPUT_FILE_KEY)
            .expect("Output file should always be present in config")
            .clone()
    }

    pub fn set_output_file(&self, path: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(OUTPUT_FILE_KEY), path);
    }
}
