fn main() {
    donate_modal_ui::run();
}
