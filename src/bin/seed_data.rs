// Entrypoint for the test-data seeder.
// - Keeps `main` small: create an API client and hand it to the seeding
//   flow in `seeder::run`.
// - Asks for confirmation first, since the run writes rows into whatever
//   backend the base URL points at.

use dialoguer::Confirm;
use edusys_devtools::api::ApiClient;
use edusys_devtools::config::SeederConfig;
use edusys_devtools::seeder;

fn main() -> anyhow::Result<()> {
    let config = SeederConfig::default();
    let mut api = ApiClient::new(&config.base_url)?;

    println!("================ Test data seeder ================");
    let proceed = Confirm::new()
        .with_prompt(format!(
            "Create {} students against {}?",
            config.student_count,
            api.base_url()
        ))
        .default(true)
        .interact()?;
    if !proceed {
        println!("Aborted, nothing was created.");
        return Ok(());
    }

    let report = seeder::run(&mut api, &config)?;
    println!(
        "Seeding finished: {} of {} students created",
        report.created, report.attempted
    );
    // TODO: seed exam questions as well once the backend's question
    // payload shape is settled; there is no endpoint contract for it yet.

    Ok(())
}
