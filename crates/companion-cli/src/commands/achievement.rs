//! Achievement commands.

use std::path::PathBuf;

use clap::Subcommand;
use companion_core::{Achievement, AchievementCategory, CoreError, Notice, ProofArtifact};

#[derive(Subcommand)]
pub enum AchievementAction {
    /// Record a new achievement
    Add {
        /// Achievement title
        title: String,
        /// Category: academic, sports, or extra-curricular
        #[arg(long)]
        category: String,
        /// Description of the achievement
        #[arg(long)]
        description: String,
        /// Path to an optional proof file (name and size are recorded;
        /// the content is not read)
        #[arg(long)]
        proof: Option<PathBuf>,
    },
    /// List achievements
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AchievementAction, empty: bool) -> Result<(), CoreError> {
    let (mut session, _config) = super::open_session(empty);
    let now = chrono::Utc::now();

    match action {
        AchievementAction::Add {
            title,
            category,
            description,
            proof,
        } => {
            let category: AchievementCategory = match category.parse() {
                Ok(category) => category,
                Err(err) => return Err(super::task::rejection(&err)),
            };
            let proof = proof.map(proof_artifact);
            let event = match session
                .achievements
                .add(&title, category, &description, proof, now)
            {
                Ok(event) => event,
                Err(err) => return Err(super::task::rejection(&err)),
            };
            if let Some(notice) = Notice::for_event(&event) {
                println!("{}: {}", notice.title, notice.body);
            }
            print_achievements(session.achievements.achievements());
        }
        AchievementAction::List { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(session.achievements.achievements())?
                );
            } else {
                print_achievements(session.achievements.achievements());
            }
        }
    }

    Ok(())
}

/// Proof is tracked by presence and basic metadata only.
fn proof_artifact(path: PathBuf) -> ProofArtifact {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let artifact = ProofArtifact::new(file_name);
    match std::fs::metadata(&path) {
        Ok(meta) => artifact.with_size(meta.len()),
        Err(_) => artifact,
    }
}

fn print_achievements(achievements: &[Achievement]) {
    if achievements.is_empty() {
        println!("No achievements yet. Add your first one!");
        return;
    }
    for achievement in achievements {
        let proof = if achievement.has_proof {
            "Proof Uploaded"
        } else {
            "No Proof"
        };
        println!(
            "  {}  {} [{}] ({})",
            achievement.id, achievement.title, achievement.category, proof
        );
        println!("       {}", achievement.description);
    }
}
