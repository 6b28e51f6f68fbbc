//! Synthetic vendor archives for install tests

#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Archive name, expected module name, expected version
pub struct ArchiveCase {
    pub archive: &'static str,
    pub module: &'static str,
    pub version: &'static str,
}

pub const CASES: &[ArchiveCase] = &[
    ArchiveCase {
        archive: "spark-pro-22.1-x86_64-linux-bin.tar.gz",
        module: "sparkpro",
        version: "22.1",
    },
    ArchiveCase {
        archive: "spark-pro-23.0w-20220202-x86_64-linux-bin.tar.gz",
        module: "sparkpro",
        version: "23.0w-20220202",
    },
    ArchiveCase {
        archive: "gnatpro-20.2-x86_64-linux-bin.tar.gz",
        module: "gnatpro",
        version: "20.2",
    },
    ArchiveCase {
        archive: "gnatpro-22.2-x86_64-linux-bin.tar.gz",
        module: "gnatpro",
        version: "22.2",
    },
    ArchiveCase {
        archive: "gnatpro-23.0w-20220202-x86_64-linux-bin.tar.gz",
        module: "gnatpro",
        version: "23.0w-20220202",
    },
    ArchiveCase {
        archive: "gnatpro-23.0w-20220202-arm-elf-linux64-bin.tar.gz",
        module: "gnatpro-arm-elf",
        version: "23.0w-20220202",
    },
    ArchiveCase {
        archive: "gnatpro-23.0w-20220202-riscv64-elf-linux64-bin.tar.gz",
        module: "gnatpro-riscv64-elf",
        version: "23.0w-20220202",
    },
    ArchiveCase {
        archive: "codepeer-22.1-x86_64-linux-bin.tar.gz",
        module: "codepeer",
        version: "22.1",
    },
    ArchiveCase {
        archive: "codepeer-23.0w-20220202-x86_64-linux-bin.tar.gz",
        module: "codepeer",
        version: "23.0w-20220202",
    },
    ArchiveCase {
        archive: "gnatstudio-23.2-x86_64-linux-bin.tar.gz",
        module: "gnatstudio",
        version: "23.2",
    },
    ArchiveCase {
        archive: "gnatpro-23.0w-20220202-aarch64-qnx-linux64-bin.tar.gz",
        module: "gnatpro-aarch64-qnx",
        version: "23.0w-20220202",
    },
    ArchiveCase {
        archive: "gnatpro-24.1rc-20231020-aarch64-qnx-linux64-bin.tar.gz",
        module: "gnatpro-aarch64-qnx",
        version: "24.1rc-20231020",
    },
    ArchiveCase {
        archive: "gnatpro-24.1rc-20231020-aarch64-elf-linux64-bin.tar.gz",
        module: "gnatpro-aarch64-elf",
        version: "24.1rc-20231020",
    },
    ArchiveCase {
        archive: "gnatpro-24.1rc-20231020-x86_64-linux-bin.tar.gz",
        module: "gnatpro",
        version: "24.1rc-20231020",
    },
];

/// Marker file a real installation of `module` would contain
pub fn marker_for(module: &str) -> &'static str {
    if module.starts_with("gnatstudio") {
        "bin/gnatstudio"
    } else if module.starts_with("gnat") {
        "bin/gnat"
    } else if module.starts_with("spark") {
        "bin/gnatprove"
    } else if module.starts_with("codepeer") {
        "bin/codepeer"
    } else {
        panic!("no marker for {module}")
    }
}

/// Installer script mimicking how each vendor installer receives its target
fn doinstall_script(archive: &str) -> String {
    let read_target = if archive.starts_with("gnatpro") {
        "read _blank\nread target\n"
    } else if archive.starts_with("spark-pro") {
        "read target\n"
    } else {
        "target=\"$1\"\n"
    };
    format!("#!/bin/sh\nset -e\n{read_target}mkdir -p \"$target\"\ntouch \"$target/done\"\n")
}

/// Write a vendor-style archive named `name` into `dir`.
///
/// The archive holds `<name without .tar.gz>/doinstall`, which creates a
/// `done` file inside the installation directory it is given.
pub fn write_vendor_archive(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let top = name.trim_end_matches(".tar.gz");

    let encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut dir_header = tar::Header::new_gnu();
    dir_header.set_entry_type(tar::EntryType::Directory);
    dir_header.set_mode(0o755);
    dir_header.set_size(0);
    dir_header.set_cksum();
    builder
        .append_data(&mut dir_header, format!("{top}/"), std::io::empty())
        .unwrap();

    let script = doinstall_script(name);
    let mut header = tar::Header::new_gnu();
    header.set_mode(0o755);
    header.set_size(script.len() as u64);
    header.set_cksum();
    builder
        .append_data(&mut header, format!("{top}/doinstall"), script.as_bytes())
        .unwrap();

    builder.into_inner().unwrap().finish().unwrap();
    path
}

/// Stand in for the binaries a vendor installer would have created
pub fn create_marker(installation_dir: &Path, module: &str) {
    std::fs::create_dir_all(installation_dir.join(marker_for(module))).unwrap();
}
