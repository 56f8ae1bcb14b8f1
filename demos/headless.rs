use f3map::prelude::*;

/// Frames a few AO clusters the way the map does when a cluster is tapped,
/// without any map widget attached.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    println!("F3 map headless viewport demo");
    println!("=============================");

    // What the map shows right now: most of Texas at zoom 6
    let mut map = CurrentView::new(LatLngBounds::new(36.5, 26.0, -93.5, -106.5), 6.0);

    let clusters = vec![
        (
            "Dallas",
            vec![
                MarkerLeaf::from_lat_lng("the-grind".to_string(), LatLng::new(32.7767, -96.7970), "The Grind"),
                MarkerLeaf::from_lat_lng("the-forge".to_string(), LatLng::new(32.9126, -96.6389), "The Forge"),
                MarkerLeaf::new("pending".to_string(), None, "Pending location"),
            ],
        ),
        (
            "Houston",
            vec![
                MarkerLeaf::from_lat_lng("bayou".to_string(), LatLng::new(29.7604, -95.3698), "Bayou"),
                MarkerLeaf::from_lat_lng("katy".to_string(), LatLng::new(29.7858, -95.8245), "Katy"),
                MarkerLeaf::from_lat_lng("woodlands".to_string(), LatLng::new(30.1658, -95.4613), "Woodlands"),
            ],
        ),
    ];

    let options = LeafFitOptions::new(FitProfile::Cluster.resolve()?)?;
    println!("Fit config:\n{}", options.config.to_json_string()?);

    for (name, leaves) in &clusters {
        let bounds = bounds_of_leaves(leaves)?;
        let viewport = fit_map_to_leaves(&mut map, leaves, &options)?;
        println!(
            "\n{name}: {} leaves, bounds N {:.4} S {:.4} E {:.4} W {:.4}",
            leaves.len(),
            bounds.north,
            bounds.south,
            bounds.east,
            bounds.west
        );
        println!("  -> {}", serde_json::to_string(&viewport)?);
    }

    // A view with no extent cannot be fitted against; the default zoom is used
    let flat = CurrentView::new(LatLngBounds::from_point(LatLng::new(32.0, -97.0)), 6.0);
    let fallback = map_pos_for_leaves(&clusters[0].1, &flat, &options)?;
    println!("\nDegenerate view -> zoom {}", fallback.zoom);

    Ok(())
}
