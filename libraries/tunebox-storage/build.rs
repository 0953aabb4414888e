// sqlx::migrate! embeds the SQL files at compile time, so a new or edited
// migration must force a rebuild.
fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
