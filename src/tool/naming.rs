//! Naming conventions of vendor archives and Lmod module identifiers

use super::kind::ToolKind;
use once_cell::sync::Lazy;
use regex::Regex;

const VERSION: &str = r"[\d.wrc]*(?:-\d*)?";

static ARCHIVE_PATTERNS: Lazy<Vec<(ToolKind, Regex)>> = Lazy::new(|| {
    ToolKind::ALL
        .iter()
        .map(|kind| {
            let pattern = format!(
                r"^{}-({VERSION})-([\w-]*)-(linux(?:64)?)-bin\.tar\.gz",
                regex::escape(kind.archive_name())
            );
            (*kind, Regex::new(&pattern).expect("archive pattern is valid"))
        })
        .collect()
});

static MODULE_PATTERNS: Lazy<Vec<(ToolKind, Regex)>> = Lazy::new(|| {
    ToolKind::ALL
        .iter()
        .map(|kind| {
            let pattern = format!(r"^{}((?:-[^/]*)?)/({VERSION})", regex::escape(kind.name()));
            (*kind, Regex::new(&pattern).expect("module pattern is valid"))
        })
        .collect()
});

/// Fields captured from an archive file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    pub version: String,
    pub target: String,
    pub platform: String,
}

/// Fields captured from a module identifier such as `gnatpro-arm-elf/23.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName {
    pub version: String,
    pub target: String,
}

/// First kind whose archive prefix starts `file_name`
pub fn archive_kind(file_name: &str) -> Option<ToolKind> {
    ToolKind::ALL
        .into_iter()
        .find(|kind| file_name.starts_with(kind.archive_name()))
}

/// First kind whose module name starts `module`
pub fn module_kind(module: &str) -> Option<ToolKind> {
    ToolKind::ALL
        .into_iter()
        .find(|kind| module.starts_with(kind.name()))
}

pub fn parse_archive_name(kind: ToolKind, file_name: &str) -> Option<ArchiveName> {
    let captures = pattern_for(&ARCHIVE_PATTERNS, kind).captures(file_name)?;
    Some(ArchiveName {
        version: captures[1].to_string(),
        target: captures[2].to_string(),
        platform: captures[3].to_string(),
    })
}

pub fn parse_module_name(kind: ToolKind, module: &str) -> Option<ModuleName> {
    let captures = pattern_for(&MODULE_PATTERNS, kind).captures(module)?;
    let target = &captures[1];
    Some(ModuleName {
        target: target.strip_prefix('-').unwrap_or(target).to_string(),
        version: captures[2].to_string(),
    })
}

fn pattern_for(patterns: &[(ToolKind, Regex)], kind: ToolKind) -> &Regex {
    patterns
        .iter()
        .find_map(|(k, re)| (*k == kind).then_some(re))
        .expect("every tool kind has a pattern")
}
