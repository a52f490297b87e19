// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn folders() -> WorkspaceFolders {
    WorkspaceFolders::new([PathBuf::from("/src/app"), PathBuf::from("/src/app/tools"), PathBuf::from("/src/lib")])
}

#[yare::parameterized(
    top_level     = { "/src/app/main.go",           Some("/src/app") },
    nested_root   = { "/src/app/tools/gen/gen.go",  Some("/src/app/tools") },
    other_root    = { "/src/lib/x.go",              Some("/src/lib") },
    outside       = { "/tmp/x.go",                  None },
    prefix_only   = { "/src/application/x.go",      None },
)]
fn resolve_cases(document: &str, expected: Option<&str>) {
    let folders = folders();
    let resolved = folders.resolve(&DocumentId::new(document));
    assert_eq!(resolved, expected.map(Path::new));
}

#[test]
fn empty_folders_resolve_nothing() {
    let folders = WorkspaceFolders::default();
    assert!(folders.roots().is_empty());
    assert_eq!(folders.resolve(&DocumentId::new("/src/app/main.go")), None);
}
