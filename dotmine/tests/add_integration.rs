//! Integration tests for adding paths to the mine.
//!
//! These tests drive `Reconciler::add` end to end against a temporary home
//! directory: parent creation, moving, conflict prompts, recursive merges
//! and the final symlink. Prompts are answered by a `ScriptedPrompter`, so
//! every test also checks which questions were asked.

mod common;

use std::fs;

use common::{assert_links_to, read, MineFixture};
use dotmine::{Decision, Error, MineRoots, Outcome, Reconciler, ScriptedPrompter};

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_readd_file_is_already_linked() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".gitconfig"), "[user]");

    let (first, _) = fx.add(".gitconfig", &[]);
    assert_eq!(first.unwrap(), Outcome::Relocated);

    let (second, prompter) = fx.add(".gitconfig", &[]);
    assert_eq!(second.unwrap(), Outcome::AlreadyLinked);
    assert!(prompter.asked().is_empty());

    assert_eq!(read(&fx.mine(".gitconfig")), "[user]");
    assert_links_to(&fx.home(".gitconfig"), &fx.mine(".gitconfig"));
}

#[test]
fn test_readd_directory_is_already_linked() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".config/nvim/init.lua"), "-- nvim");

    fx.add(".config/nvim", &[]).0.unwrap();
    let (second, prompter) = fx.add(".config/nvim", &[]);

    assert_eq!(second.unwrap(), Outcome::AlreadyLinked);
    assert!(prompter.asked().is_empty());
    assert_eq!(read(&fx.home(".config/nvim/init.lua")), "-- nvim");
}

#[test]
fn test_relative_link_to_destination_is_already_linked() {
    // The link target is relative to the link's directory, so `dotmine/.vimrc`
    // from the home root resolves to the destination.
    let fx = MineFixture::new();
    fx.write(&fx.mine(".vimrc"), "set nu");
    fx.link(std::path::Path::new("dotmine/.vimrc"), &fx.home(".vimrc"));

    let (result, _) = fx.add(".vimrc", &[]);
    assert_eq!(result.unwrap(), Outcome::AlreadyLinked);
}

// =============================================================================
// Directory collisions
// =============================================================================

#[test]
fn test_merge_keeps_both_sides() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".config/a"), "a");
    fx.write(&fx.home(".config/deep/x/y"), "y");
    fx.write(&fx.mine(".config/b"), "b");
    fx.write(&fx.mine(".config/deep/z"), "z");

    let (result, prompter) = fx.add(".config", &[Decision::Merge]);

    assert_eq!(result.unwrap(), Outcome::Merged);
    assert_eq!(read(&fx.mine(".config/a")), "a");
    assert_eq!(read(&fx.mine(".config/b")), "b");
    assert_eq!(read(&fx.mine(".config/deep/x/y")), "y");
    assert_eq!(read(&fx.mine(".config/deep/z")), "z");
    assert_links_to(&fx.home(".config"), &fx.mine(".config"));

    // Only the top-level collision needs a decision.
    assert_eq!(prompter.asked().len(), 1);
    assert_eq!(
        prompter.asked()[0].choices(),
        &[Decision::Overwrite, Decision::Merge, Decision::Skip]
    );
    assert_eq!(prompter.asked()[0].default_choice(), Some(Decision::Skip));
}

#[test]
fn test_merge_asks_for_each_file_conflict() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".config/one"), "home one");
    fx.write(&fx.home(".config/two"), "home two");
    fx.write(&fx.mine(".config/one"), "mine one");
    fx.write(&fx.mine(".config/two"), "mine two");

    // Children are visited in enumeration order, so answer identically.
    let (result, prompter) = fx.add(
        ".config",
        &[Decision::Merge, Decision::Overwrite, Decision::Overwrite],
    );

    assert_eq!(result.unwrap(), Outcome::Merged);
    assert_eq!(read(&fx.mine(".config/one")), "home one");
    assert_eq!(read(&fx.mine(".config/two")), "home two");
    assert_eq!(prompter.asked().len(), 3);
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn test_merge_drops_links_that_already_point_into_the_mine() {
    // A previous `add .config/fish` left a link inside `.config`.
    let fx = MineFixture::new();
    fx.write(&fx.home(".config/fish/config.fish"), "set -x");
    fx.add(".config/fish", &[]).0.unwrap();
    fx.write(&fx.home(".config/kitty.conf"), "font");
    fx.mkdir(&fx.mine(".config"));

    let (result, prompter) = fx.add(".config", &[Decision::Merge]);

    assert_eq!(result.unwrap(), Outcome::Merged);
    assert_eq!(prompter.asked().len(), 1);
    assert!(fx.mine(".config/fish").is_dir());
    assert_eq!(read(&fx.mine(".config/fish/config.fish")), "set -x");
    assert_eq!(read(&fx.mine(".config/kitty.conf")), "font");
}

#[test]
fn test_skip_leaves_everything_untouched() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".config/a"), "a");
    fx.write(&fx.mine(".config/b"), "b");

    let (result, _) = fx.add(".config", &[Decision::Skip]);

    assert_eq!(result.unwrap(), Outcome::Declined);
    assert!(fs::symlink_metadata(fx.home(".config"))
        .unwrap()
        .file_type()
        .is_dir());
    assert_eq!(read(&fx.home(".config/a")), "a");
    assert!(!fx.mine(".config/a").exists());
}

#[test]
fn test_overwrite_replaces_destination_directory() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".config/a"), "a");
    fx.write(&fx.mine(".config/stale"), "stale");

    let (result, _) = fx.add(".config", &[Decision::Overwrite]);

    assert_eq!(result.unwrap(), Outcome::Overwrote);
    assert!(!fx.mine(".config/stale").exists());
    assert_eq!(read(&fx.mine(".config/a")), "a");
}

// =============================================================================
// File against directory
// =============================================================================

#[test]
fn test_file_against_directory_delete_source() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".x"), "a file");
    fx.write(&fx.mine(".x/inside"), "kept");

    let (result, prompter) = fx.add(".x", &[Decision::DeleteSource]);

    assert_eq!(result.unwrap(), Outcome::Discarded);
    assert_eq!(
        prompter.asked()[0].choices(),
        &[Decision::Overwrite, Decision::DeleteSource]
    );
    assert!(fx.mine(".x").is_dir());
    assert_links_to(&fx.home(".x"), &fx.mine(".x"));
    assert_eq!(read(&fx.home(".x/inside")), "kept");
}

// =============================================================================
// Parent chain
// =============================================================================

#[test]
fn test_parents_are_created_in_the_mine() {
    let fx = MineFixture::without_mine();
    fx.write(&fx.home(".local/share/app/state"), "s");

    let (result, prompter) = fx.add(".local/share/app/state", &[]);

    assert_eq!(result.unwrap(), Outcome::Relocated);
    assert!(prompter.asked().is_empty());
    assert!(fx.mine(".local/share/app").is_dir());
    assert_eq!(read(&fx.mine(".local/share/app/state")), "s");
    assert!(fx.home(".local/share/app").is_dir());
}

#[test]
fn test_file_in_parent_chain_prompts_then_overwrites() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".config/app/settings"), "s");
    fx.write(&fx.mine(".config"), "a stray file");

    let (result, prompter) = fx.add(".config/app/settings", &[Decision::Overwrite]);

    assert_eq!(result.unwrap(), Outcome::Relocated);
    let asked = prompter.asked();
    assert_eq!(asked.len(), 1);
    assert!(asked[0]
        .message()
        .contains(&fx.mine(".config").display().to_string()));
    assert_eq!(asked[0].choices(), &[Decision::Overwrite, Decision::Abort]);
    assert_eq!(asked[0].default_choice(), Some(Decision::Abort));
    assert_eq!(read(&fx.mine(".config/app/settings")), "s");
}

#[test]
fn test_file_in_parent_chain_abort() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".config/app/settings"), "s");
    fx.write(&fx.mine(".config"), "a stray file");

    let (result, _) = fx.add(".config/app/settings", &[Decision::Abort]);

    assert!(matches!(result, Err(Error::StructureConflict { .. })));
    assert_eq!(read(&fx.mine(".config")), "a stray file");
    assert_eq!(read(&fx.home(".config/app/settings")), "s");
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_rejection_boundary() {
    let fx = MineFixture::new();
    fx.write(&fx.mine(".vimrc"), "x");

    let (in_mine, _) = fx.add("dotmine/.vimrc", &[]);
    assert!(matches!(in_mine, Err(Error::AlreadyMined { .. })));

    let (mine_root, _) = fx.add("dotmine", &[]);
    assert!(matches!(mine_root, Err(Error::AlreadyMined { .. })));

    let mut reconciler = Reconciler::new(fx.roots(), ScriptedPrompter::default());
    let outside = fx.roots().home().parent().unwrap().to_path_buf();
    assert!(matches!(
        reconciler.add(&outside),
        Err(Error::NotInHome { .. })
    ));
    assert!(matches!(
        reconciler.add(fx.roots().home()),
        Err(Error::InvalidPath { .. })
    ));
}

#[test]
fn test_path_below_linked_directory_is_rejected() {
    let fx = MineFixture::new();
    fx.write(&fx.home(".config/nvim/init.lua"), "-- nvim");
    fx.add(".config", &[]).0.unwrap();

    for answer in [Decision::DeleteSource, Decision::Overwrite] {
        let (result, prompter) = fx.add(".config/nvim/init.lua", &[answer]);
        assert!(
            matches!(result, Err(Error::AlreadyMined { .. })),
            "{answer}: {result:?}"
        );
        assert!(prompter.asked().is_empty());
    }

    let (dir_result, _) = fx.add(".config/nvim", &[Decision::Merge]);
    assert!(matches!(dir_result, Err(Error::AlreadyMined { .. })));

    assert_eq!(read(&fx.mine(".config/nvim/init.lua")), "-- nvim");
    assert_links_to(&fx.home(".config"), &fx.mine(".config"));
}

#[test]
fn test_ancestor_of_mine_is_rejected() {
    let fx = MineFixture::new();
    fx.mkdir(&fx.home("data/mine"));
    let roots = MineRoots::new(fx.roots().home(), fx.home("data/mine")).unwrap();

    let mut reconciler = Reconciler::new(&roots, ScriptedPrompter::default());
    let result = reconciler.add(&fx.home("data"));

    assert!(matches!(result, Err(Error::InvalidPath { .. })));
    assert!(fx.home("data/mine").is_dir());
}

#[test]
fn test_link_to_other_mine_entry_is_unsupported() {
    let fx = MineFixture::new();
    fx.write(&fx.mine(".bashrc.old"), "old");
    fx.link(&fx.mine(".bashrc.old"), &fx.home(".bashrc"));

    let (result, prompter) = fx.add(".bashrc", &[]);

    assert!(matches!(result, Err(Error::UnsupportedRelink { .. })));
    assert!(prompter.asked().is_empty());
    assert!(!fx.mine(".bashrc").exists());
}

#[test]
fn test_missing_source_is_rejected() {
    let fx = MineFixture::new();
    let (result, _) = fx.add(".nothing", &[]);
    assert!(matches!(result, Err(Error::SourceNotFound { .. })));
}
