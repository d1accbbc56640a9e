#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bikeshare binary.
#[macro_export]
macro_rules! bikeshare {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bikeshare"))
    };
}

/// Eight Chicago trips across January, February, March and June.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:05:00,2017-01-02 08:15:00,600,Canal St,Clark St,Subscriber,Male,1985.0
1,2017-01-06 17:20:00,2017-01-06 17:25:00,300,Canal St,Lake St,Subscriber,Female,1990.0
2,2017-03-03 17:45:00,2017-03-03 17:47:00,120,Clark St,Canal St,Customer,,
3,2017-03-06 08:30:00,2017-03-06 08:45:00,900,Canal St,Clark St,Subscriber,Male,1985.0
4,2017-03-06 17:10:00,2017-03-06 17:17:30,450,Lake St,Clark St,Customer,,
5,2017-06-23 17:00:00,2017-06-23 17:01:00,60,Canal St,Clark St,Subscriber,Female,1972.0
6,2017-06-26 23:59:00,2017-06-27 00:24:00,1500,Lake St,Canal St,Subscriber,Male,2001.0
7,2017-02-03 00:15:00,2017-02-03 00:16:15,75,Clark St,Lake St,Customer,Female,1990.0
";

/// Washington trips: no gender or birth year columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-06 07:57:00,2017-03-06 08:05:09,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
1,2017-03-07 12:00:00,2017-03-07 12:06:42,402.549,Lincoln Memorial,Jefferson Memorial,Customer
2,2017-06-26 12:30:00,2017-06-26 12:50:00,1200.5,Lincoln Memorial,Jefferson Memorial,Customer
";

/// A temporary working directory holding city tables and config files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A fixture with `chicago.csv` and `washington.csv` in its root.
    pub fn with_cities() -> Self {
        let fixture = Self::new();
        fixture.create_file("chicago.csv", CHICAGO_CSV);
        fixture.create_file("washington.csv", WASHINGTON_CSV);
        fixture
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".bikeshare.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// The binary, run inside the fixture with user config lookups redirected into it.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = bikeshare!();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join("user-config"))
            .env("HOME", self.path())
            .env("NO_COLOR", "1");
        cmd
    }
}
