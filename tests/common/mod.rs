// Test utility module for cfgexport integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway workspace with a `cfg/` tree and a settings file.
pub struct Workspace {
    _tmp: TempDir,
    pub root: PathBuf,
    pub cfg_dir: PathBuf,
}

impl Workspace {
    /// Teams `payments` and `search` across two clusters.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let cfg_dir = root.join("cfg");
        fs::create_dir_all(cfg_dir.join("eu")).expect("create cfg dir");

        let ws = Self {
            _tmp: tmp,
            root,
            cfg_dir,
        };
        ws.write_cfg(
            "eu/payments_eu_api.cfg",
            "# payments api\nexport REPLICAS='3'\nexport IMAGE=registry/payments:1.2\nexport GITHUB_SHA='abc123'\n",
        );
        ws.write_cfg(
            "eu/payments_eu_worker_queue.cfg",
            "export REPLICAS=1\nexport GITHUB_SHA=abc123\n",
        );
        ws.write_cfg("payments_us_api.cfg", "export REPLICAS=6\n");
        ws.write_cfg(
            "search_eu_indexer.cfg",
            "export SHARDS='4'\nexport GITHUB_REF=main\n",
        );
        ws.write_settings(
            "cfg_path: cfg\ngithub_var_names:\n  - GITHUB_SHA\n  - GITHUB_REF\n",
        );
        ws
    }

    pub fn write_cfg(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.cfg_dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).expect("create parent");
        fs::write(&path, content).expect("write cfg");
        path
    }

    pub fn write_settings(&self, content: &str) {
        fs::write(self.root.join("private.yaml"), content).expect("write settings");
    }

    /// The binary, run from the workspace root with a clean environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cfgexport").expect("binary built");
        cmd.current_dir(&self.root)
            .env_remove("CFGEXPORT_CONFIG")
            .env_remove("CFGEXPORT_CFG_PATH")
            .env_remove("RUST_LOG");
        cmd
    }

    /// The binary, run from `rel` below the workspace root.
    pub fn cmd_in(&self, rel: &str) -> Command {
        let dir = self.root.join(rel);
        fs::create_dir_all(&dir).expect("create working dir");
        let mut cmd = self.cmd();
        cmd.current_dir(dir);
        cmd
    }

    pub fn run_stdout(&self, args: &[&str]) -> String {
        let out = self.cmd().args(args).assert().success().get_output().stdout.clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read output file")
}
