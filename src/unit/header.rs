//! Header of a generated unit file: comment block plus the `[Unit]` section.

/// Values substituted into the header.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Unit name without the `.service` suffix.
    pub service_name: String,
    /// Suppress the `# autogenerated` comment block.
    pub generate_no_header: bool,
    pub podman_version: String,
    /// Rendered inside the comment block when present and non-empty.
    pub time_stamp: Option<String>,
    pub graph_root: String,
    pub run_root: String,
}

/// Render the header. The `[Unit]` section is always present.
pub fn render_header(info: &HeaderInfo) -> String {
    let mut out = format!("# {}.service\n", info.service_name);

    if !info.generate_no_header {
        out.push_str(&format!(
            "# autogenerated by Podman {}\n",
            info.podman_version
        ));
        if let Some(ts) = info.time_stamp.as_deref().filter(|ts| !ts.is_empty()) {
            out.push_str(&format!("# {}\n", ts));
        }
    }

    out.push('\n');
    out.push_str("[Unit]\n");
    out.push_str(&format!("Description=Podman {}.service\n", info.service_name));
    out.push_str("Documentation=man:podman-generate-systemd(1)\n");
    out.push_str("Wants=network.target\n");
    out.push_str("After=network-online.target\n");
    out.push_str(&format!(
        "RequiresMountsFor={} {}\n",
        info.graph_root, info.run_root
    ));
    out
}
