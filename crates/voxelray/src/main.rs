use anyhow::Result;
use clap::Parser;
use glam::{IVec3, Vec3, Vec4};
use grid::{Voxel, VoxelGrid};
use raycast::{cast_ray, TraversalResult, MAX_RAY_LENGTH};
use tracing::info;

#[derive(Parser)]
#[command(name = "voxelray")]
#[command(about = "Cast a ray through a seeded voxel grid", long_about = None)]
struct Cli {
    /// Ray origin as "x,y,z"
    #[arg(short, long, default_value = "0,0,0", value_parser = parse_vec3)]
    origin: Vec3,

    /// Planar direction angle in degrees
    #[arg(short, long, default_value_t = 0.0)]
    angle: f32,

    /// Distance budget in grid units
    #[arg(short, long, default_value_t = MAX_RAY_LENGTH)]
    max_distance: f32,

    /// Grid edge length
    #[arg(long, default_value_t = VoxelGrid::DEFAULT_SIDE)]
    side: usize,

    /// Occupied cell to seed, as "x,y,z"
    #[arg(long, default_value = "0,5,0", value_parser = parse_ivec3)]
    seed: IVec3,

    /// Color of the seeded cell, as "r,g,b,a"
    #[arg(long, default_value = "100,0,0,0", value_parser = parse_vec4)]
    color: Vec4,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut grid = VoxelGrid::with_side(cli.side);
    grid.set(cli.seed, Voxel::solid(cli.color))?;
    info!(seed = %cli.seed, side = cli.side, "grid seeded");

    let result = cast_ray(&grid, cli.origin, cli.angle, cli.max_distance)?;
    match result {
        TraversalResult::Hit { voxel, distance } => {
            let c = voxel.color;
            println!(
                "hit: color ({}, {}, {}, {}) after {distance:.3} units",
                c.x, c.y, c.z, c.w
            );
        }
        TraversalResult::Miss { distance } => {
            println!("miss after {distance:.3} units");
        }
    }

    Ok(())
}

/// Parse a Vec3 from a string like "0.5,0.5,0"
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = parse_floats(s, 3)?;
    Ok(Vec3::new(parts[0], parts[1], parts[2]))
}

/// Parse a Vec4 from a string like "100,0,0,0"
fn parse_vec4(s: &str) -> Result<Vec4, String> {
    let parts = parse_floats(s, 4)?;
    Ok(Vec4::new(parts[0], parts[1], parts[2], parts[3]))
}

/// Parse an IVec3 from a string like "0,5,0"
fn parse_ivec3(s: &str) -> Result<IVec3, String> {
    let parts: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 components, got {}", parts.len()));
    }
    let x = parts[0].parse::<i32>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<i32>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<i32>().map_err(|e| e.to_string())?;
    Ok(IVec3::new(x, y, z))
}

fn parse_floats(s: &str, n: usize) -> Result<Vec<f32>, String> {
    let parts: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
    if parts.len() != n {
        return Err(format!("expected {n} components, got {}", parts.len()));
    }
    parts
        .iter()
        .map(|p| p.parse::<f32>().map_err(|e| e.to_string()))
        .collect()
}
