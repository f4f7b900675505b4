use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("wink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Window capture and pointer-input tool")
        .long_about(
            "wink enumerates on-screen windows, captures still images of a selected \
             window, and injects synthetic pointer input targeted at the window's \
             owning process.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // List subcommand
        .subcommand(
            Command::new("list").about("List on-screen windows").arg(
                Arg::new("json")
                    .long("json")
                    .help("Output in JSON format")
                    .action(ArgAction::SetTrue),
            ),
        )
        // Shot subcommand
        .subcommand(
            Command::new("shot")
                .about("Capture a still image of one window")
                .arg(
                    Arg::new("window")
                        .long("window")
                        .short('w')
                        .required(true)
                        .help("Window selector: directory index or case-sensitive title/owner substring"),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .help("Target image width hint in pixels (default: native size)")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .help("Target image height hint in pixels (default: native size)")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Save to file path (default: output base64 to stdout)"),
                )
                .arg(
                    Arg::new("base64")
                        .long("base64")
                        .help("Output base64 encoded image (default if no --output)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["png", "jpg", "jpeg"])
                        .default_value("png"),
                )
                .arg(
                    Arg::new("quality")
                        .long("quality")
                        .help("JPEG quality (1-100, default: 85)")
                        .value_parser(clap::value_parser!(u8))
                        .default_value("85"),
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .help("Capture completion timeout in milliseconds (default: 5000)")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("5000"),
                ),
        )
        // Click subcommand
        .subcommand(
            Command::new("click")
                .about("Inject a pointer click into a window's owning process")
                .arg(
                    Arg::new("window")
                        .long("window")
                        .short('w')
                        .required(true)
                        .help("Window selector: directory index or case-sensitive title/owner substring"),
                )
                .arg(
                    Arg::new("at")
                        .long("at")
                        .required(true)
                        .help("Click position as x,y relative to the window's top-left"),
                )
                .arg(
                    Arg::new("double")
                        .long("double")
                        .help("Send a double click instead of a single click")
                        .action(ArgAction::SetTrue),
                ),
        )
        // Move subcommand
        .subcommand(
            Command::new("move")
                .about("Move the pointer to a position within a window")
                .arg(
                    Arg::new("window")
                        .long("window")
                        .short('w')
                        .required(true)
                        .help("Window selector: directory index or case-sensitive title/owner substring"),
                )
                .arg(
                    Arg::new("at")
                        .long("at")
                        .required(true)
                        .help("Pointer position as x,y relative to the window's top-left"),
                ),
        )
}
