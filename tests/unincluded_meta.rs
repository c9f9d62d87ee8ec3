#![cfg(not(target_arch = "wasm32"))]

#[test]
fn homepage_tracks_branch_or_tag() {
	let Some(branch) = git_info::get().current_branch else {
		// Not a git checkout.
		return;
	};

	let homepage = env!("CARGO_PKG_HOMEPAGE");
	assert!(
		homepage.ends_with(concat!("/tree/v", env!("CARGO_PKG_VERSION")))
			|| homepage.ends_with(&format!("/tree/{branch}")),
		"`homepage` should point at the release tag or the current branch ({branch}): {homepage}",
	);
}
