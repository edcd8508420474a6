use std::env;

#[derive(Debug, Default)]
pub struct CliArgs {
    pub file: Option<String>,
    pub base_url: Option<String>,
}

pub fn parse_args() -> Result<CliArgs, String> {
    let mut args = env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --file".to_string())?;
                parsed.file = Some(value);
            }
            "--base-url" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --base-url".to_string())?;
                parsed.base_url = Some(value);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }

    Ok(parsed)
}

pub fn print_help() {
    println!(
        "Costboard CLI\n\n\
Usage:\n  costboard [--file <workbook>] [--base-url <url>]\n\n\
Options:\n  --file <workbook>  Spreadsheet (.xls/.xlsx) to upload to the backend\n  --base-url <url>   Override the configured backend URL for this run only\n  -h, --help         Show this help message\n"
    );
}
