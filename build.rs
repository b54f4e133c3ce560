const CONFIG_VARS: &[&str] = &[
    "PORTFOLIO_SUPABASE_URL",
    "PORTFOLIO_SUPABASE_ANON_KEY",
    "PORTFOLIO_EMAILJS_SERVICE_ID",
    "PORTFOLIO_EMAILJS_TEMPLATE_ID",
    "PORTFOLIO_EMAILJS_PUBLIC_KEY",
    "PORTFOLIO_OWNER_EMAIL",
    "PORTFOLIO_PROFILE_UPLOAD",
];

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Service credentials are baked in with option_env!, so a change must rebuild
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
