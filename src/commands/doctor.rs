use sysinfo::System;

pub async fn run() {
    println!("🔍 Checking environment health...\n");

    let mut all_ok = true;

    print!("• Checking working directory... ");
    match std::env::current_dir() {
        Ok(dir) if std::fs::read_dir(&dir).is_ok() => println!("✓ {}", dir.display()),
        _ => {
            println!("✗ Working directory is not readable");
            all_ok = false;
        }
    }

    print!("• Checking temp directory... ");
    if temp_writable() {
        println!("✓ Writable");
    } else {
        println!("✗ Cannot write to the temp directory");
        all_ok = false;
    }

    print!("• Checking project index... ");
    if std::path::Path::new("PROJECT_INDEX.md").exists() {
        println!("✓ PROJECT_INDEX.md present");
    } else {
        println!("○ No PROJECT_INDEX.md (create with: airis index . -o .)");
    }

    print!("• Checking available memory... ");
    let mut sys = System::new_all();
    sys.refresh_memory();
    let available_mb = sys.available_memory() as f64 / 1024.0 / 1024.0;
    if available_mb > 256.0 {
        println!("✓ {:.0} MB available", available_mb);
    } else {
        println!("⚠️  Low memory: {:.0} MB available", available_mb);
        all_ok = false;
    }

    println!();
    if all_ok {
        println!("✅ All checks passed!");
    } else {
        println!("⚠️  Some checks failed. Fix the issues above.");
        std::process::exit(1);
    }
}

fn temp_writable() -> bool {
    let probe = std::env::temp_dir().join("airis-doctor-probe");
    match std::fs::write(&probe, b"ok") {
        Ok(()) => {
            let _ = std::fs::remove_file(&probe);
            true
        }
        Err(_) => false,
    }
}
