fn main() {
    tokenscript_scaffold::cli::run();
}
