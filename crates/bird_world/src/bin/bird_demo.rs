use bird_world::Bird;

fn main() {
    let mut bird = Bird::new(10);

    bird.grab("stick").expect("claws should be empty");
    println!("{}", bird.examine("stick").expect("stick should be held"));
    bird.drop_item("stick").expect("stick should be held");

    bird.build_nest().expect("no nest built yet");
    bird.feed_chick().expect("nest was just built");

    println!("{}", bird.rest());
    println!("size after grow: {}", bird.grow());
    println!("size after shrink: {}", bird.shrink());

    bird.walk_named("north").expect("origin is well inside bounds");
    let undone = bird.undo().expect("history is not empty");
    println!("undid history entry: {}", undone.as_str());

    let state = serde_json::to_string_pretty(&bird).expect("bird state serializes");
    println!("final state:\n{state}");
}
