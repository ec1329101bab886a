//! The built-in navigation data set: the "Little Hell Engine" reference
//! manual this library ships with as its default document set.

use waypost_tree::{NavNode, NavTarget, NavTreeBuilder, NavTreeStore};
use waypost_types::AnchorId;

fn page(anchor: &str) -> NavTarget {
    NavTarget::Page(anchor.into())
}

/// Builds the navigation store for the Little Hell Engine manual.
///
/// The data is fixed at compile time and passes validation by
/// construction, so this never fails.
pub fn little_hell_engine() -> NavTreeStore {
    let root = NavNode::branch(
        "Little Hell Engine",
        page("index.html"),
        vec![
            NavNode::leaf("Motivation", page("index.html#autotoc_md7")),
            NavNode::branch(
                "Goals",
                page("index.html#autotoc_md8"),
                vec![NavNode::leaf("Progress", page("index.html#autotoc_md9"))],
            ),
            NavNode::branch(
                "Features (Planned)",
                page("index.html#autotoc_md13"),
                vec![
                    NavNode::leaf("Scripting support with Lua", page("index.html#autotoc_md14")),
                    NavNode::leaf("Support for Zig", page("index.html#autotoc_md16")),
                    NavNode::leaf("DOOM limit removal", page("index.html#autotoc_md17")),
                    NavNode::leaf("Patches from Crispy Doom", page("index.html#autotoc_md18")),
                ],
            ),
            NavNode::leaf("Examples", page("index.html#autotoc_md19")),
            NavNode::leaf("Building", page("index.html#autotoc_md20")),
            NavNode::leaf("Credits", page("index.html#autotoc_md21")),
            NavNode::branch(
                "Drawable API Design Document",
                page("md_drawable_api.html"),
                vec![
                    NavNode::leaf(
                        "Creating a Drawable",
                        page("md_drawable_api.html#autotoc_md10"),
                    ),
                    NavNode::branch(
                        "Destroying a drawable",
                        page("md_drawable_api.html#autotoc_md11"),
                        vec![NavNode::leaf(
                            "Accessing a Drawable",
                            page("md_drawable_api.html#autotoc_md12"),
                        )],
                    ),
                ],
            ),
            NavNode::leaf("Adding music to", page("md_music.html")),
            NavNode::branch(
                "The DOOM HUD",
                page("md_hud_and_status_bar.html"),
                vec![
                    NavNode::leaf(
                        "On-Screen Messages",
                        page("md_hud_and_status_bar.html#autotoc_md22"),
                    ),
                    NavNode::branch(
                        "Status Bar",
                        page("md_hud_and_status_bar.html#autotoc_md23"),
                        vec![NavNode::leaf(
                            "Reponsibilities of the Status Bar",
                            page("md_hud_and_status_bar.html#autotoc_md24"),
                        )],
                    ),
                ],
            ),
            NavNode::leaf("Todo List", page("todo.html")),
            NavNode::external("Modules", page("modules.html"), "modules"),
            NavNode::branch(
                "Classes",
                page("annotated.html"),
                vec![
                    NavNode::external("Class List", page("annotated.html"), "annotated_dup"),
                    NavNode::leaf("Class Index", page("classes.html")),
                    NavNode::branch(
                        "Class Members",
                        page("functions.html"),
                        vec![
                            NavNode::leaf("All", page("functions.html")),
                            NavNode::leaf("Variables", page("functions_vars.html")),
                        ],
                    ),
                ],
            ),
            NavNode::branch(
                "Files",
                page("files.html"),
                vec![
                    NavNode::external("File List", page("files.html"), "files_dup"),
                    NavNode::branch(
                        "File Members",
                        page("globals.html"),
                        vec![
                            NavNode::external("All", page("globals.html"), "globals_dup"),
                            NavNode::leaf("Functions", page("globals_func.html")),
                            NavNode::leaf("Variables", page("globals_vars.html")),
                            NavNode::leaf("Typedefs", page("globals_type.html")),
                            NavNode::leaf("Enumerations", page("globals_enum.html")),
                            NavNode::leaf("Enumerator", page("globals_eval.html")),
                            NavNode::leaf("Macros", page("globals_defs.html")),
                        ],
                    ),
                ],
            ),
        ],
    );

    NavTreeBuilder::new(root)
        .index_table(vec![
            AnchorId::new("annotated.html"),
            AnchorId::new("midifile_8c.html#ad4d796b98c583d49e83adabd74a63bf6"),
        ])
        .toggle_messages(
            "click to disable panel synchronisation",
            "click to enable panel synchronisation",
        )
        .build()
        .expect("builtin navigation data is valid")
}
