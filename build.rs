const UI_ENTRY_PATH: &str = "ui/app-window.slint";

fn main() {
    println!("cargo:rerun-if-changed={UI_ENTRY_PATH}");

    slint_build::compile(UI_ENTRY_PATH).expect("Slint build failed");
}
