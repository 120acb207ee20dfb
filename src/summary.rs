use nsusip::{Audit, Options};
use std::path::Path;

mod ansi {
    use std::io::{self, IsTerminal};

    pub const DIM: &str = "2";
    pub const BOLD: &str = "1";
    pub const GREEN: &str = "32";
    pub const YELLOW: &str = "33";
    pub const BLUE: &str = "34";
    pub const CYAN: &str = "36";
    pub const GRAY: &str = "90";

    /// SGR styling, or plain text when color is off.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        /// `--color` wins over `--no-color`; neither means "only on a terminal".
        pub fn detect(force: bool, disable: bool) -> Self {
            let enabled = force || (!disable && io::stdout().is_terminal());
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, code: &str) -> String {
            if self.enabled { format!("\x1b[{code}m{}\x1b[0m", s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

pub fn print_audit(input: &Path, audit: &Audit, options: &Options, force_color: bool, no_color: bool) {
    let palette = ansi::Palette::detect(force_color, no_color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Auditing: {}", input.display()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Services ━━━", ansi::GRAY));
    if audit.services.is_empty() {
        println!("{}", palette.dim("  No add service directives found"));
    } else {
        print_services(audit, options, &palette);
    }

    println!("\n{}", palette.paint(format!("━━━ {} {} ━━━", options.flag_marker, options.sentinel), ansi::GRAY));
    if audit.lines.is_empty() {
        println!("{}", palette.dim("  No service qualifies"));
    } else {
        for line in &audit.lines {
            println!("  {}", palette.paint(line, ansi::GREEN));
        }
    }

    println!(
        "\n  Services: {}  │  Reported: {}  │  Elapsed: {}",
        palette.paint(audit.services.len().to_string(), ansi::BLUE),
        palette.paint(audit.lines.len().to_string(), ansi::GREEN),
        palette.dim(format!("{:?}", audit.elapsed)),
    );
    println!();
}

fn print_services(audit: &Audit, options: &Options, palette: &ansi::Palette) {
    for service in &audit.services {
        let flag = match &service.flag {
            Some(value) if service.flag_is(&options.sentinel) => palette.bold(palette.paint(value, ansi::GREEN)),
            Some(value) => palette.paint(value, ansi::YELLOW),
            None => palette.dim("-"),
        };

        println!(
            "  {} {} {} {}",
            palette.paint(format!("L{}", service.line), ansi::GRAY),
            palette.bold(&service.name),
            palette.dim("│"),
            flag,
        );
        println!(
            "      {} {}/{}  {} {} {}",
            palette.dim("listen:"),
            palette.paint(&service.protocol, ansi::BLUE),
            palette.paint(&service.port, ansi::BLUE),
            palette.dim("│ server:"),
            palette.paint(&service.server.name, ansi::CYAN),
            palette.dim(format!("{} (L{})", service.server.address, service.server.line)),
        );
    }
}
