fn main() {
    bpr::app::cli::run();
}
