use std::env;
use std::path::PathBuf;
use thaigeo::{FlatMatcher, HierarchyMatcher};

fn main() -> thaigeo::Result<()> {
    env_logger::init();

    let data_path = env::var_os("THAIGEO_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("data")
                .join("geography.sample.json")
        });
    // A broken dataset is fatal
    let flat = FlatMatcher::from_path(&data_path)?;
    let hierarchy = HierarchyMatcher::global();

    let args: Vec<String> = env::args().skip(1).collect();
    let queries: Vec<&str> = if args.is_empty() {
        vec![
            // Thai province, broad match
            "เชียงใหม่",
            // prefixed district
            "อ.เมือง",
            "จังหวัดขอนแก่น",
            // English, any case
            "chiang",
            "PAK KRET",
            // spans two levels
            "Si Phum, Mueang",
            // nothing
            "Phuket",
            "",
        ]
    } else {
        args.iter().map(String::as_str).collect()
    };

    println!("=== Province/district suggestions ===\n");
    for q in &queries {
        let hits = hierarchy.search(q);
        println!("query: {:?} ({} hits)", q, hits.len());
        for s in hits {
            println!("  [{}] {} / {}", s.kind, s.name, s.name_en);
        }
        println!();
    }

    println!("=== Dataset suggestions ({}) ===\n", data_path.display());
    for q in &queries {
        let hits = flat.search(q);
        println!("query: {:?} ({} hits)", q, hits.len());
        for s in hits {
            println!(
                "  #{} {} | {} | {}",
                s.id, s.full_display_name, s.full_display_name_th, s.postal_code
            );
        }
        println!();
    }

    Ok(())
}
