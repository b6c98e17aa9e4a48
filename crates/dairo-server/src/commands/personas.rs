use dairo_core::persona::Persona;

pub fn run() {
    for persona in Persona::all() {
        println!(
            "{:<20} {:<20} {}",
            persona.key(),
            persona.label(),
            persona.descriptor()
        );
    }
}
