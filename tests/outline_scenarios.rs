//! Document-level parsing scenarios
//!
//! Each test parses a small outline end to end and checks the full tree shape.

use rstest::rstest;
use taskpaper::testing::assert_outline;
use taskpaper::{parse_str, IndentPolicy, NodeKind, OutlineBuilder, ParseConfig, Tag};

fn nested(text: &str) -> taskpaper::Outline {
    parse_str(text, &ParseConfig::nested())
}

#[test]
fn test_single_task_with_tag() {
    let outline = nested("- Buy milk @home\n");
    assert_outline(&outline).root_count(1).root(0, |t| {
        t.assert_task()
            .text("Buy milk @home")
            .tags(&[Tag::new("home")])
            .no_children();
    });
}

#[test]
fn test_project_with_tasks() {
    let outline = nested("Groceries:\n\t- Milk\n\t- Eggs\n");
    assert_outline(&outline).root_count(1).root(0, |p| {
        p.assert_project()
            .text("Groceries")
            .child_count(2)
            .child(0, |t| {
                t.assert_task().text("Milk").no_children();
            })
            .child(1, |t| {
                t.assert_task().text("Eggs").no_children();
            });
    });
}

#[test]
fn test_project_switch_clears_open_tasks() {
    let outline = nested("Work:\n- Email @due(today)\nPersonal:\n- Call mom\n");
    assert_outline(&outline)
        .root_count(2)
        .root(0, |p| {
            p.assert_project().text("Work").child_count(1).child(0, |t| {
                t.assert_task()
                    .text("Email @due(today)")
                    .tags(&[Tag::with_arg("due", "today")]);
            });
        })
        .root(1, |p| {
            p.assert_project().text("Personal").child_count(1).child(0, |t| {
                t.assert_task().text("Call mom").no_tags();
            });
        });
}

#[rstest]
#[case("   \n")]
#[case("\t\t\n")]
#[case("\n")]
fn test_whitespace_line_changes_nothing(#[case] blank: &str) {
    let plain = "Work:\n\t- Email\n\t\t  details\n- Next\n";
    let with_blanks = format!("Work:\n{blank}\t- Email\n{blank}\t\t  details\n{blank}- Next\n");
    assert_eq!(nested(&with_blanks), nested(plain));
}

#[test]
fn test_dedent_closes_nested_project() {
    let outline = nested("P:\n  Q:\n    - deep task\nR:\n    - after\n");
    assert_outline(&outline)
        .root_count(2)
        .root(0, |p| {
            p.assert_project().text("P").child_count(1).child(0, |q| {
                q.assert_project().text("Q").child_count(1).child(0, |t| {
                    t.assert_task().text("deep task");
                });
            });
        })
        .root(1, |r| {
            r.assert_project().text("R").child_count(1).child(0, |t| {
                t.assert_task().text("after");
            });
        });
}

#[test]
fn test_dedent_alone_closes_deeper_tasks() {
    let outline = nested("P:\n\tQ:\n\t\t- T\nX\n\t\t\tdeep\n");
    assert_outline(&outline).root_count(1).root(0, |p| {
        p.assert_project()
            .text("P")
            .child_count(3)
            .child(0, |q| {
                q.assert_project().text("Q").child_count(1).child(0, |t| {
                    t.assert_task().text("T").no_children();
                });
            })
            .child(1, |x| {
                x.assert_note().text("X");
            })
            .child(2, |deep| {
                deep.assert_note().text("deep");
            });
    });
}

#[test]
fn test_nested_tasks_and_notes() {
    let outline = nested(concat!(
        "Trip:\n",
        "\t- Pack @today\n",
        "\t  remember the charger\n",
        "\t- Book hotel @due(friday)\n",
        "a loose note\n",
    ));
    assert_outline(&outline)
        .root_count(1)
        .total(NodeKind::Note, 2)
        .root(0, |p| {
            p.assert_project()
                .text("Trip")
                .child_count(3)
                .child(0, |t| {
                    t.assert_task().text("Pack @today").child_count(1).child(0, |n| {
                        n.assert_note().text("remember the charger").indent("\t ");
                    });
                })
                .child(1, |t| {
                    t.assert_task()
                        .tags(&[Tag::with_arg("due", "friday")])
                        .no_children();
                })
                .child(2, |n| {
                    n.assert_note().text("a loose note");
                });
        });
}

#[test]
fn test_leading_items_before_first_project_are_roots() {
    let outline = nested("intro note\n- stray task\nProject:\n- owned\n");
    assert_outline(&outline)
        .root_count(3)
        .root(0, |n| {
            n.assert_note().text("intro note");
        })
        .root(1, |t| {
            t.assert_task().text("stray task").no_children();
        })
        .root(2, |p| {
            p.assert_project().child_count(1);
        });
}

#[test]
fn test_mixed_terminators_parse_identically() {
    let unix = nested("Work:\n\t- Email\n");
    assert_eq!(nested("Work:\r\n\t- Email\r\n"), unix);
    assert_eq!(nested("Work:\r\t- Email\r"), unix);
}

#[test]
fn test_charset_indent_treats_repeated_tabs_as_one_level() {
    let outline = nested("P:\n\t- a\n\t\t- b\n");
    assert_outline(&outline).root(0, |p| {
        p.assert_project().child_count(2);
    });
}

#[test]
fn test_width_indent_nests_repeated_tabs() {
    let config = ParseConfig::nested().with_indent(IndentPolicy::Width);
    let outline = parse_str("P:\n\t- a\n\t\t- b\n", &config);
    assert_outline(&outline).root(0, |p| {
        p.assert_project().child_count(1).child(0, |a| {
            a.assert_task().text("a").child_count(1);
        });
    });
}

#[test]
fn test_flat_mode_ignores_indentation() {
    let outline = parse_str(
        "Work:\n\t- Email\n\t\t- Reply\nnote\nHome:\n  - Cook\n",
        &ParseConfig::flat(),
    );
    assert_outline(&outline)
        .root_count(2)
        .root(0, |p| {
            p.assert_project().text("Work").child_count(3);
        })
        .root(1, |p| {
            p.assert_project().text("Home").child_count(1);
        });
}

#[test]
fn test_flat_mode_nests_projects_never() {
    let outline = parse_str("A:\n\tB:\n", &ParseConfig::flat());
    assert_outline(&outline).root_count(2);
}

#[test]
fn test_incremental_feed_matches_parse_str() {
    let text = "Work:\n\t- Email\n\t  note\nHome:\n- Cook\n";
    let mut builder = OutlineBuilder::new(ParseConfig::nested());
    for line in text.split_inclusive('\n') {
        builder.feed(line);
    }
    assert_eq!(builder.finish(), nested(text));
}
