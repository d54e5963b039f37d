// File: src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "paschal v{} - Generate recurring iCalendar events for Easter-based holidays",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} <holiday-name> <offset-days> [OPTIONS]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <holiday-name>        Event summary, e.g. \"Good Friday\".");
    println!("    <offset-days>         Days before Easter Sunday, 0 to 80.");
    println!();
    println!("OPTIONS:");
    println!("    --check               Re-expand the emitted rules and verify every");
    println!("                          occurrence against the Easter table first.");
    println!("    --wrap                Wrap the events in a VCALENDAR envelope so the");
    println!("                          output is a standalone .ics document.");
    println!("    -o, --output <path>   Write to a file instead of stdout.");
    println!("    -h, --help            Show this help message.");
    println!("    -V, --version         Show the version.");
    println!();
    println!("COMMON OFFSETS:");
    println!("    0     Easter Sunday");
    println!("    2     Good Friday");
    println!("    7     Palm Sunday");
    println!("    46    Ash Wednesday");
    println!("    47    Mardi Gras");
    println!();
    println!("EXAMPLES:");
    println!("    {} \"Good Friday\" 2 > good-friday.ics", binary_name);
    println!("    {} \"Ash Wednesday\" 46 --check --wrap -o ash-wednesday.ics", binary_name);
    println!();
    println!("The generated recurrences are valid through 2099. Set PASCHAL_LOG=debug");
    println!("to see how each cycle slot is scheduled.");
}
