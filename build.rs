fn main() {
    // Rebuild when the checked-out revision changes so the version string stays honest.
    let git_dir = std::process::Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .ok()
        .and_then(|output| {
            std::str::from_utf8(&output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        });

    if let Some(git_dir) = git_dir {
        let git_path = std::path::Path::new(&git_dir);
        for entry in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if git_path.join(entry).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{entry}");
            }
        }
    }

    let git_info = std::process::Command::new("git")
        .args(["describe", "--always", "--tags", "--long", "--dirty"])
        .output()
        .ok()
        .and_then(|output| {
            std::str::from_utf8(&output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        });

    if let Some(git_info) = git_info {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}
