/// Example walking through coset enumeration and point location
///
/// Enumerates the cosets of Γ0(4), prints the tile every representative contributes to
/// the subgroup's fundamental domain, and locates a few points in the tessellation.
use modular_domains::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Fundamental domain of Γ0(4) ===\n");

    let subgroup = CongruenceSubgroup::Gamma0;
    let level = Level::new(4)?;
    let reps = CosetEnumerator::new(subgroup, level).enumerate();
    let domain = FundamentalDomain::standard();

    println!("1. Coset representatives (index {}):", subgroup.index(level));
    for (i, r) in reps.iter().enumerate() {
        let corners: Vec<String> = domain.tile(r).iter().map(|c| c.to_string()).collect();
        println!("   {:>2}  {:<20}  corners: {}", i, r.to_string(), corners.join(", "));
    }

    println!("\n2. Locating points:");
    for (re, im) in [(0.3, 2.0), (5.0, 0.1), (-0.2, 0.4), (0.45, 0.05)] {
        let point = ExtendedPoint::finite(re, im);
        match domain.find_coset_of(point) {
            Some(g) => {
                let tile = domain.locate_representative(subgroup, level, &reps, point);
                println!("   {} lies in g(F) for g = {}, tile {:?}", point, g, tile);
            }
            None => println!("   {} could not be located", point),
        }
    }

    println!("\n3. Edges of the standard domain:");
    for edge in domain.tile_edges(&Moebius::identity()) {
        println!("   {:?}", edge);
    }

    Ok(())
}
