use colour::red;

pub fn print_intro() {
    println!(
        r#"
             _       _             _       __
   ____ ___  (_)___  (_)___  ____ _(_)___  / /_
  / __ `__ \/ / __ \/ / __ \/ __ `/ / __ \/ __/
 / / / / / / / / / / / /_/ / /_/ / / / / / /_
/_/ /_/ /_/_/_/ /_/_/ .___/\__,_/_/_/ /_/\__/
                   /_/                        "#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Filling and undoing fills is way slower than it should be.\n\n");
    }
}
