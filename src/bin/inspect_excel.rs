use std::path::Path;

fn main() {
    xlhead::logging::init();

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = xlhead::run(&mut stdout, Path::new(xlhead::DEFAULT_FILE_PATH)) {
        tracing::warn!("failed to write report: {err}");
    }
}
