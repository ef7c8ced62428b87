//! Plain-text views of the shell.

use std::io::{self, Write};

use workshop_core::calculations::common::format_money;
use workshop_core::{Catalog, OrderSummary, ServiceSession, TaskFilter, View};

pub const HELP: &str = "\
Service list:
  list                          show all orders
  new                           start a new order
  edit <id>                     open an order
Editing an order:
  add <task> / remove <task>    select or deselect a catalog task
  qty <task> = <n>              set task quantity
  note <task> = <text>          set task remarks
  vehicle <text>                set vehicle number
  part <name> [= <n> [@ <price>]]  add a spare part
  unpart <name>                 remove all parts with that name
  unpart-at <no> / part-qty <no> = <n>
  filter <all|type>             filter the catalog
  hub / entry                   switch between Parts Hub and Workmanship Panel
  show                          redraw the current view
  export                        print the order as JSON
  save / back                   save and close, or close without saving
Other:
  log <level>                   change log level
  help / quit";

pub fn list(
    out: &mut impl Write,
    summaries: &[OrderSummary],
) -> io::Result<()> {
    writeln!(out, "Workshop Services")?;
    if summaries.is_empty() {
        return writeln!(out, "  (no services yet, use `new`)");
    }
    writeln!(
        out,
        "{:<15} {:<16} {:>10} {:>12} {:>10}  {}",
        "ID", "Vehicle No", "Tasks", "Spare Parts", "Total", "Created"
    )?;
    for s in summaries {
        writeln!(
            out,
            "{:<15} {:<16} {:>10} {:>12} {:>10}  {}",
            s.id,
            s.vehicle_label(),
            format!("${}", format_money(s.tasks_total)),
            format!("${}", format_money(s.spare_parts_total)),
            format!("${}", format_money(s.grand_total)),
            s.created_date.format("%Y-%m-%d"),
        )?;
    }
    Ok(())
}

fn filter_bar(
    out: &mut impl Write,
    catalog: &Catalog,
    active: TaskFilter,
) -> io::Result<()> {
    let mut filters = vec![TaskFilter::All];
    filters.extend(catalog.task_types().into_iter().map(TaskFilter::Type));
    let labels: Vec<String> = filters
        .iter()
        .map(|f| {
            if *f == active {
                format!("[{}]", f.label())
            } else {
                f.label().to_string()
            }
        })
        .collect();
    writeln!(out, "Filter: {}", labels.join(" "))
}

/// One-line status shown after every edit.
pub fn status(
    out: &mut impl Write,
    session: &ServiceSession<'_>,
) -> io::Result<()> {
    let totals = session.totals();
    let badges: Vec<String> = session
        .badges()
        .iter()
        .map(|(id, n)| format!("{id}:{n}"))
        .collect();
    writeln!(
        out,
        "Workmanship ${} | Spare parts ${} | Total ${} | {}",
        format_money(totals.tasks),
        format_money(totals.spare_parts),
        format_money(totals.grand),
        badges.join(" ")
    )
}

pub fn entry(
    out: &mut impl Write,
    session: &ServiceSession<'_>,
) -> io::Result<()> {
    let catalog = session.catalog();
    let order = session.order();
    let visible = session.visible_tasks();

    writeln!(out, "== {} | order {} ==", View::Entry.label(), order.id)?;
    filter_bar(out, catalog, session.filter())?;
    for category in catalog.categories() {
        writeln!(out, "{} ({})", category, session.badges().count(category.as_str()))?;
        for task in catalog.tasks_in(category) {
            if !visible.iter().any(|t| t.name == task.name) {
                continue;
            }
            let mark = if order.is_selected(&task.name) { "x" } else { " " };
            writeln!(
                out,
                "  [{mark}] {:<20} ${} per {}",
                task.name,
                format_money(task.price),
                task.unit.as_str()
            )?;
        }
    }

    writeln!(out, "-- Vehicle No: {}", order.vehicle_label())?;
    for selected in &order.selected_tasks {
        writeln!(
            out,
            "  {:<20} {}: {:<4} Subtotal: ${}",
            selected.name(),
            selected.task.unit.label(),
            selected.quantity,
            format_money(selected.subtotal())
        )?;
        if !selected.remarks.is_empty() {
            writeln!(out, "    Notes: {}", selected.remarks)?;
        }
    }
    status(out, session)
}

pub fn parts_hub(
    out: &mut impl Write,
    session: &ServiceSession<'_>,
) -> io::Result<()> {
    let order = session.order();
    let totals = session.totals();

    writeln!(out, "== {} | order {} ==", View::PartsHub.label(), order.id)?;
    writeln!(out, "Vehicle No: {}", order.vehicle_label())?;
    writeln!(
        out,
        "{:<20} {:>8} {:<7} {:>10}  {}",
        "Task Name", "Quantity", "Unit", "Subtotal", "Notes"
    )?;
    for selected in &order.selected_tasks {
        let notes = if selected.remarks.is_empty() { "-" } else { selected.remarks.as_str() };
        writeln!(
            out,
            "{:<20} {:>8} {:<7} {:>10}  {}",
            selected.name(),
            selected.quantity,
            selected.task.unit.label(),
            format!("${}", format_money(selected.subtotal())),
            notes
        )?;
    }
    writeln!(out, "Total: ${}", format_money(totals.tasks))?;

    writeln!(out, "Spare Parts")?;
    writeln!(out, "{:<4} {:<20} {:>8} {:>10}", "No.", "Name", "Quantity", "Unit Price")?;
    for (i, part) in order.spare_parts.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<20} {:>8} {:>10}",
            i + 1,
            part.name,
            part.quantity,
            format!("${}", format_money(part.unit_price))
        )?;
    }
    writeln!(out, "Total: ${}", format_money(totals.spare_parts))?;
    status(out, session)
}

pub fn view(
    out: &mut impl Write,
    session: &ServiceSession<'_>,
) -> io::Result<()> {
    match session.view() {
        View::Entry => entry(out, session),
        View::PartsHub => parts_hub(out, session),
    }
}
