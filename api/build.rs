//! Bakes `NOVENTA_*` settings from `.env` into the build. The browser has no
//! process environment, so configuration is read with `option_env!`.

const KEYS: [&str; 3] = [
    "NOVENTA_API_URL",
    "NOVENTA_CATALOG_URL",
    "NOVENTA_MOCK_CATALOG",
];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let Ok(vars) = dotenvy::dotenv_iter() else {
        return;
    };

    for (key, value) in vars.flatten() {
        // Variables already set in the environment win over `.env`.
        if KEYS.contains(&key.as_str()) && std::env::var(&key).is_err() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
