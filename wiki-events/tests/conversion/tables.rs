use crate::common::{cell, row, trace, wikitable};
use insta::assert_snapshot;
use wiki_events::ir::attributes::Attributes;
use wiki_events::ir::token::{CellKind, TableRow, WikiTable};

#[test]
fn test_caption_is_rendered_before_the_table() {
    let table = WikiTable {
        attributes: Attributes::new().with("class", "wikitable"),
        rows: vec![
            row(vec![
                cell(CellKind::Caption, "Cap"),
                cell(CellKind::Header, "H"),
            ]),
            TableRow {
                attributes: Attributes::new().with("style", "s"),
                cells: vec![cell(CellKind::Body, "x")],
            },
        ],
    };

    assert_snapshot!(trace(&[wikitable(table)]), @r###"
    begin document
      begin group
        begin group
          word "Cap"
        end group
        begin table {class="wikitable"}
          begin table_row
            begin table_head_cell
              word "H"
            end table_head_cell
          end table_row
          begin table_row {style="s"}
            begin table_cell
              word "x"
            end table_cell
          end table_row
        end table
      end group
    end document
    "###);
}

#[test]
fn test_table_without_caption_has_no_groups() {
    let table = WikiTable {
        rows: vec![
            row(vec![cell(CellKind::Header, "A"), cell(CellKind::Header, "B")]),
            row(vec![cell(CellKind::Body, " 1 "), cell(CellKind::Body, "2")]),
        ],
        ..Default::default()
    };

    assert_snapshot!(trace(&[wikitable(table)]), @r###"
    begin document
      begin table
        begin table_row
          begin table_head_cell
            word "A"
          end table_head_cell
          begin table_head_cell
            word "B"
          end table_head_cell
        end table_row
        begin table_row
          begin table_cell
            word "1"
          end table_cell
          begin table_cell
            word "2"
          end table_cell
        end table_row
      end table
    end document
    "###);
}

#[test]
fn test_misplaced_caption_renders_as_a_cell() {
    let table = WikiTable {
        rows: vec![row(vec![
            cell(CellKind::Body, "a"),
            cell(CellKind::Caption, "late"),
        ])],
        ..Default::default()
    };

    assert_snapshot!(trace(&[wikitable(table)]), @r###"
    begin document
      begin table
        begin table_row
          begin table_cell
            word "a"
          end table_cell
          begin table_cell
            word "late"
          end table_cell
        end table_row
      end table
    end document
    "###);
}

#[test]
fn test_empty_rows_still_emit_row_events() {
    let table = WikiTable {
        rows: vec![row(vec![])],
        ..Default::default()
    };

    assert_snapshot!(trace(&[wikitable(table)]), @r###"
    begin document
      begin table
        begin table_row
        end table_row
      end table
    end document
    "###);
}
