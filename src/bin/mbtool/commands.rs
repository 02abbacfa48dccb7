use anyhow::{Context, Result, bail};
use nalgebra::Vector3;

use molblock::{MolecularStructure, SimBox, order};

use crate::cli::{Command, InputArgs, OrderArgs};

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Info(args) => info(&args),
        Command::Order(args) => orientation(&args),
    }
}

fn load(input: &InputArgs) -> Result<MolecularStructure> {
    let mut block = MolecularStructure::new();

    if let Some(path) = &input.prototype {
        block
            .load_prototype(path)
            .with_context(|| format!("reading prototype {}", path.display()))?;
    }
    if let Some(path) = &input.xyz {
        block
            .load_xyz(path)
            .with_context(|| format!("reading XYZ file {}", path.display()))?;
    }
    if let Some(path) = &input.coord {
        block
            .load_coords(path)
            .with_context(|| format!("reading coordinate table {}", path.display()))?;
    }
    if let Some(path) = &input.masses {
        block
            .load_masses(path)
            .with_context(|| format!("reading mass table {}", path.display()))?;
    }
    if let Some(path) = &input.charges {
        block
            .load_charges(path)
            .with_context(|| format!("reading charge table {}", path.display()))?;
    }

    if block.atom_count() == 0 {
        bail!("no coordinates loaded; pass --prototype, --xyz or --coord");
    }
    Ok(block)
}

fn info(input: &InputArgs) -> Result<()> {
    let mut block = load(input)?;

    println!("atoms:     {}", block.atom_count());
    println!("bonds:     {}", block.bond_count());
    println!("angles:    {}", block.angle_count());
    println!("dihedrals: {}", block.dihedral_count());
    println!("impropers: {}", block.improper_count());

    if block.masses.len() == block.atom_count() {
        let com = block.calc_com()?;
        println!("center of mass: {:10.4} {:10.4} {:10.4}", com[0], com[1], com[2]);
    } else {
        println!("center of mass: (no masses loaded)");
    }

    let r_gyr_sq = block.calc_r_gyr_sq()?;
    println!("radius of gyration: {:.4}", r_gyr_sq.sqrt());

    Ok(())
}

fn orientation(args: &OrderArgs) -> Result<()> {
    let mut block = load(&args.input)?;

    if block.masses.len() != block.atom_count() {
        bail!(
            "inertia analysis needs one mass per atom ({} masses for {} atoms); pass --masses",
            block.masses.len(),
            block.atom_count()
        );
    }

    if args.unwrap {
        // clap guarantees --box came with --unwrap.
        if let Some(lengths) = args.box_lengths.as_deref() {
            let bounds = SimBox::from_lengths([lengths[0], lengths[1], lengths[2]]);
            block.unwrap(&bounds, [true, true, true]);
        }
    }

    let inertia = block.inertia_tensor()?;
    println!("inertia tensor:");
    for row in 0..3 {
        println!(
            "  {:12.4} {:12.4} {:12.4}",
            inertia[(row, 0)],
            inertia[(row, 1)],
            inertia[(row, 2)]
        );
    }

    let axis = order::director(&inertia);
    println!("director: {:8.4} {:8.4} {:8.4}", axis[0], axis[1], axis[2]);

    let mut tilt = order::angle_between(&axis, &Vector3::new(0.0, 0.0, 1.0));
    // A director is headless; fold the angle into [0, 90].
    if tilt > 90.0 {
        tilt = 180.0 - tilt;
    }
    println!("tilt from +z: {tilt:.2} deg");

    Ok(())
}
