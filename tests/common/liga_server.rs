use std::process::{Command, Child};

use assert_cmd::prelude::CommandCargoExt;
use predicates::Predicate;
use liga_server_rs::config_handler::Config;

pub struct LigaServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for LigaServer {
    fn drop(&mut self) {
        if self.child_process.is_some() {
            self.child_process.as_mut().unwrap().kill()
                .expect("Should kill");
        }
    }
}

impl LigaServer {
    pub fn new(port: u16) -> LigaServer {
        LigaServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str) {
        let config = Config {
            port: self.port,
            db_path: format!("{}/db", path),
            refresh_interval_s: 1,
            assets_path: format!("{}/assets", path),
            main_logo_path: "/assets/logo-mfm.svg".to_string(),
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("liga-server-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    /// Writes a collection the way the admin side does: one JSON file
    /// per key under the site store.
    pub fn seed<T: serde::Serialize>(path: &str, key: &str, value: &T) {
        LigaServer::seed_raw(path, key, &serde_json::to_string(value).unwrap());
    }

    pub fn seed_raw(path: &str, key: &str, value: &str) {
        let dir = format!("{path}/db/site");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(format!("{dir}/{key}"), value).unwrap();
    }

    pub async fn get(&self, route: &str) -> Result<reqwest::Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("http://localhost:{}{}", self.port, route)).await?)
    }

    pub async fn get_page(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.get("/").await?.text().await?)
    }

    pub async fn get_view(&self, section: &str) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.get(&format!("/views/{section}")).await?.text().await?)
    }

    pub async fn wait_until_ready(&self) {
        let mut nr_loops = 0;
        while self.get_page().await.is_err() {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            nr_loops += 1;
            if nr_loops > 100 {
                panic!("server never became ready");
            }
        }
    }

    pub async fn retry_until_page<P: Predicate<str>>(&self, predicate: P, retry_ms: u64) -> String {
        let mut nr_loops = 0;
        loop {
            if let Ok(page) = self.get_page().await {
                if predicate.eval(&page) {
                    return page;
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(retry_ms)).await;
            nr_loops += 1;
            if nr_loops > 50 {
                panic!("retry failed");
            }
        }
    }
}
