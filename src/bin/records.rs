use clap::load_yaml;
use clap::App;
use records::logging::init_logger;
use records::{parse_value, run_demo, Record, Result};
use std::io;
use tracing::debug;

fn main() -> Result<()> {
    init_logger();

    let yaml = load_yaml!("cli.yml");
    let app_m = App::from_yaml(yaml).get_matches();

    if app_m.is_present("version") {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match app_m.subcommand() {
        ("show", Some(sub_m)) => {
            let record = match (sub_m.value_of("name"), sub_m.value_of("value")) {
                (None, _) => Record::default(),
                (Some(name), None) => Record::new(name, Record::default().value()),
                (Some(name), Some(value)) => Record::new(name, parse_value(value)?),
            };
            debug!(?record, "showing record");
            record.render();
        }
        _ => {
            let stdout = io::stdout();
            run_demo(stdout.lock())?;
        }
    }

    Ok(())
}
