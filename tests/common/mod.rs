#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;

pub const PACKAGE_NAME: &str = "com.example.app";
pub const PACKAGE_PATH: &str = "system/app/Example/app.apk";

/// Module directory as extracted by the installer framework, plus a temp dir
/// and a fake `pm` recording every call into `pm.log`.
///
/// The fake `pm` fails installs of files containing "corrupt" and grants to
/// packages containing "unknown".
pub struct TestModule {
    pub module_dir: TempDir,
    pub tmp_dir: TempDir,
    bin_dir: TempDir,
}

impl TestModule {
    pub fn new() -> Self {
        let module = Self {
            module_dir: TempDir::new().unwrap(),
            tmp_dir: TempDir::new().unwrap(),
            bin_dir: TempDir::new().unwrap(),
        };
        module.write_fake_pm();
        module
            .module_dir
            .child("uninstall.sh")
            .write_str(&format!("pm uninstall {PACKAGE_NAME}"))
            .unwrap();
        module
            .module_dir
            .child(PACKAGE_PATH)
            .write_str("some package content")
            .unwrap();
        module
    }

    fn write_fake_pm(&self) {
        let pm = self.pm_path();
        fs::write(
            &pm,
            format!(
                r#"#!/bin/sh
echo "$@" >> "{log}"
case "$1" in
    install)
        [ -f "$3" ] || {{ echo "Failure [INSTALL_FAILED_INVALID_URI]"; exit 1; }}
        if grep -q corrupt "$3"; then
            echo "Failure [INSTALL_PARSE_FAILED_NOT_APK]"
            exit 1
        fi
        echo Success
        ;;
    grant)
        case "$2" in
            *unknown*) echo "Exception occurred: Unknown package: $2" >&2; exit 255 ;;
        esac
        ;;
    uninstall)
        echo Success
        ;;
esac
"#,
                log = self.pm_log_path().display()
            ),
        )
        .unwrap();
        fs::set_permissions(&pm, fs::Permissions::from_mode(0o755)).unwrap();
    }

    pub fn pm_path(&self) -> PathBuf {
        self.bin_dir.path().join("pm")
    }

    fn pm_log_path(&self) -> PathBuf {
        self.bin_dir.path().join("pm.log")
    }

    /// Calls received by the fake `pm`, one per line.
    pub fn pm_calls(&self) -> String {
        fs::read_to_string(self.pm_log_path()).unwrap_or_default()
    }

    pub fn staged_package(&self) -> PathBuf {
        self.tmp_dir.path().join("app.apk")
    }

    pub fn uninstall_script_mode(&self) -> u32 {
        fs::metadata(self.module_dir.child("uninstall.sh").path())
            .unwrap()
            .permissions()
            .mode()
            & 0o777
    }

    /// Binary invocation isolated from the framework environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("module-apk-installer").unwrap();
        cmd.env_remove("MODPATH").env_remove("RUST_LOG");
        cmd
    }

    /// `install` with every value passed as a flag.
    pub fn install_cmd(&self) -> Command {
        self.install_cmd_for(PACKAGE_PATH, PACKAGE_NAME)
    }

    pub fn install_cmd_for(&self, package_path: impl AsRef<OsStr>, package_name: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("install")
            .arg("--package-path")
            .arg(package_path)
            .arg("--package-name")
            .arg(package_name)
            .arg("--module-dir")
            .arg(self.module_dir.path())
            .arg("--tmp-dir")
            .arg(self.tmp_dir.path())
            .arg("--pm-path")
            .arg(self.pm_path());
        cmd
    }

    pub fn expected_install_calls(&self) -> String {
        format!(
            "install -r {}\ngrant {PACKAGE_NAME} android.permission.READ_PHONE_STATE\n",
            self.staged_package().display()
        )
    }
}
