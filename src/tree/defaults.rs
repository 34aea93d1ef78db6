//! Built-in starter tree used on first launch and by reset.

use crate::tree::node::{Node, Tree};

pub fn default_tree() -> Tree {
    Tree::new(vec![
        Node::file(
            "readme-md",
            "README.md",
            "# Project Title\n\nThis is a sample README file.\n\n- Feature 1\n- Feature 2\n",
        ),
        Node::folder_with(
            "src",
            "src",
            true,
            vec![
                Node::file(
                    "src-main-rs",
                    "main.rs",
                    "// src/main.rs\nfn main() {\n    println!(\"Hello, world!\");\n}\n",
                ),
                Node::file(
                    "src-lib-rs",
                    "lib.rs",
                    "// src/lib.rs\npub mod components;\n",
                ),
                Node::folder_with(
                    "src-components",
                    "components",
                    false,
                    vec![
                        Node::file(
                            "src-components-button-rs",
                            "button.rs",
                            "// src/components/button.rs\npub struct Button;\n",
                        ),
                        Node::file(
                            "src-components-card-rs",
                            "card.rs",
                            "// src/components/card.rs\npub struct Card {\n    pub title: String,\n}\n",
                        ),
                    ],
                ),
                Node::folder_with(
                    "src-assets",
                    "assets",
                    true,
                    vec![
                        Node::file("src-assets-logo-svg", "logo.svg", "<svg>...</svg>"),
                        Node::file("src-assets-favicon-ico", "favicon.ico", "binary data..."),
                    ],
                ),
                Node::folder_with(
                    "src-styles",
                    "styles",
                    false,
                    vec![Node::file(
                        "src-styles-main-css",
                        "main.css",
                        "/* styles/main.css */\nbody {\n font-family: sans-serif;\n}",
                    )],
                ),
            ],
        ),
        Node::folder_with(
            "public",
            "public",
            false,
            vec![
                Node::file("public-index-html", "index.html", "<!DOCTYPE html>..."),
                Node::file("public-robots-txt", "robots.txt", "User-agent: *\nDisallow:"),
            ],
        ),
        Node::file(
            "cargo-toml",
            "Cargo.toml",
            "[package]\nname = \"my-app\"\nversion = \"0.1.0\"\nedition = \"2021\"\n",
        ),
        Node::file("gitignore", ".gitignore", "target\n.DS_Store\n*.log"),
        Node::folder_with("empty-folder", "empty-folder", false, vec![]),
    ])
}
