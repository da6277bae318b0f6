//! Base recipe table: the combination dictionary shipped with the game.
//!
//! Rows are `(lo, hi, result)` with `lo <= hi`, so the table loads directly
//! into canonical dictionary keys. Results may name elements absent from the
//! base catalog; those are repaired into placeholder elements at lookup time
//! rather than rejected here.

pub(crate) const SEED_COMBINATIONS: &[(&str, &str, &str)] = &[
    ("air", "ash", "soot"),
    ("air", "bacteria", "infection"),
    ("air", "beach", "sandstorm"),
    ("air", "bee", "swarm"),
    ("air", "bird", "flight"),
    ("air", "boat", "sail"),
    ("air", "brick", "dust"),
    ("air", "car", "windshield"),
    ("air", "carbon", "co2"),
    ("air", "cat", "fur"),
    ("air", "charcoal", "carbon"),
    ("air", "cheese", "smell"),
    ("air", "cloud", "sky"),
    ("air", "coal", "smoke"),
    ("air", "computer", "fan"),
    ("air", "cow", "milkshake"),
    ("air", "crystal", "shine"),
    ("air", "desert", "sandstorm"),
    ("air", "dirt", "dust"),
    ("air", "dog", "fur"),
    ("air", "dragon", "flight"),
    ("air", "earth", "dust"),
    ("air", "electricity", "lightning"),
    ("air", "energy", "wind"),
    ("air", "fire", "smoke"),
    ("air", "fish", "flying-fish"),
    ("air", "flower", "pollen"),
    ("air", "forest", "oxygen"),
    ("air", "glass", "lens"),
    ("air", "gold", "sparkle"),
    ("air", "grass", "hay"),
    ("air", "heat", "warmth"),
    ("air", "human", "breath"),
    ("air", "ice", "snow"),
    ("air", "lava", "obsidian"),
    ("air", "leaf", "flutter"),
    ("air", "light", "glow"),
    ("air", "metal", "rust"),
    ("air", "milk", "foam"),
    ("air", "mist", "fog"),
    ("air", "moon", "night"),
    ("air", "mountain", "wind"),
    ("air", "mud", "clay"),
    ("air", "paper", "kite"),
    ("air", "plant", "pollen"),
    ("air", "plastic", "bag"),
    ("air", "rain", "storm"),
    ("air", "river", "mist"),
    ("air", "rock", "sand"),
    ("air", "sand", "dust"),
    ("air", "seed", "dandelion"),
    ("air", "shadow", "darkness"),
    ("air", "sky", "atmosphere"),
    ("air", "smoke", "pollution"),
    ("air", "snow", "blizzard"),
    ("air", "soil", "dust"),
    ("air", "sound", "echo"),
    ("air", "steam", "cloud"),
    ("air", "stone", "sand"),
    ("air", "storm", "hurricane"),
    ("air", "sun", "day"),
    ("air", "swamp", "mosquito"),
    ("air", "tree", "leaves"),
    ("air", "volcano", "eruption"),
    ("air", "water", "cloud"),
    ("air", "wave", "spray"),
    ("air", "wind", "gust"),
    ("air", "wood", "sawdust"),
    ("ash", "earth", "fertilizer"),
    ("ash", "fire", "carbon"),
    ("ash", "plant", "soil"),
    ("ash", "water", "mud"),
    ("bacteria", "human", "illness"),
    ("bacteria", "water", "plankton"),
    ("beach", "water", "shore"),
    ("bee", "flower", "honey"),
    ("bee", "tree", "hive"),
    ("bird", "egg", "nest"),
    ("bird", "tree", "nest"),
    ("boat", "fire", "steamship"),
    ("boat", "metal", "ship"),
    ("boat", "water", "sailboat"),
    ("brick", "fire", "ceramic"),
    ("brick", "mud", "clay"),
    ("car", "electricity", "ev"),
    ("car", "metal", "vehicle"),
    ("car", "oil", "engine"),
    ("carbon", "fire", "diamond"),
    ("carbon", "pressure", "diamond"),
    ("cat", "milk", "kitten"),
    ("charcoal", "fire", "forge"),
    ("bread", "cheese", "sandwich"),
    ("cloud", "electricity", "lightning"),
    ("cloud", "fire", "sunset"),
    ("cloud", "ice", "snow"),
    ("cloud", "rain", "storm"),
    ("cloud", "water", "rain"),
    ("coal", "fire", "energy"),
    ("coal", "pressure", "diamond"),
    ("computer", "electricity", "processor"),
    ("computer", "metal", "circuit"),
    ("cow", "grass", "milk"),
    ("cow", "water", "cow-wash"),
    ("crystal", "light", "prism"),
    ("desert", "water", "oasis"),
    ("dirt", "water", "mud"),
    ("dog", "human", "friend"),
    ("dragon", "fire", "dragonfire"),
    ("dragon", "gold", "hoard"),
    ("earth", "energy", "earthquake"),
    ("earth", "fire", "lava"),
    ("earth", "grass", "field"),
    ("earth", "heat", "desert"),
    ("earth", "human", "house"),
    ("earth", "ice", "glacier"),
    ("earth", "metal", "ore"),
    ("earth", "milk", "cheese"),
    ("earth", "plant", "tree"),
    ("earth", "pressure", "stone"),
    ("earth", "rain", "plant"),
    ("earth", "seed", "plant"),
    ("earth", "steam", "geyser"),
    ("earth", "stone", "mountain"),
    ("earth", "sun", "day"),
    ("earth", "tree", "forest"),
    ("earth", "water", "mud"),
    ("earth", "wind", "dust"),
    ("electricity", "energy", "power"),
    ("electricity", "fire", "plasma"),
    ("electricity", "glass", "lightbulb"),
    ("electricity", "metal", "wire"),
    ("electricity", "water", "shock"),
    ("energy", "fire", "heat"),
    ("energy", "metal", "magnet"),
    ("energy", "water", "wave"),
    ("fire", "fish", "cooked-fish"),
    ("fire", "flower", "scent"),
    ("fire", "forest", "wildfire"),
    ("fire", "glass", "molten-glass"),
    ("fire", "grass", "ash"),
    ("fire", "heat", "inferno"),
    ("fire", "human", "tool"),
    ("fire", "ice", "water"),
    ("fire", "lava", "eruption"),
    ("fire", "metal", "forge"),
    ("fire", "milk", "hot-chocolate"),
    ("fire", "mist", "steam"),
    ("fire", "mountain", "volcano"),
    ("fire", "mud", "brick"),
    ("fire", "paper", "ash"),
    ("fire", "plant", "ash"),
    ("fire", "plastic", "melted-plastic"),
    ("fire", "rain", "steam"),
    ("fire", "rock", "magma"),
    ("fire", "sand", "glass"),
    ("fire", "seed", "popcorn"),
    ("fire", "snow", "water"),
    ("fire", "steam", "pressure"),
    ("fire", "stone", "magma"),
    ("fire", "storm", "lightning"),
    ("fire", "sun", "solar-flare"),
    ("fire", "tree", "charcoal"),
    ("fire", "water", "steam"),
    ("fire", "wind", "wildfire"),
    ("fire", "wood", "charcoal"),
    ("fish", "water", "school"),
    ("flower", "water", "garden"),
    ("forest", "water", "swamp"),
    ("glass", "sand", "time"),
    ("glass", "water", "ice"),
    ("gold", "pressure", "ingot"),
    ("grass", "water", "plant"),
    ("heat", "ice", "water"),
    ("boat", "human", "sailor"),
    ("bread", "human", "sandwich"),
    ("car", "human", "driver"),
    ("cat", "human", "owner"),
    ("cheese", "human", "chef"),
    ("computer", "human", "programmer"),
    ("cow", "human", "farmer"),
    ("electricity", "human", "engineer"),
    ("fish", "human", "fisherman"),
    ("flower", "human", "gardener"),
    ("forest", "human", "lumberjack"),
    ("glass", "human", "glasses"),
    ("gold", "human", "wealth"),
    ("grass", "human", "farmer"),
    ("human", "ice", "skater"),
    ("human", "lava", "danger"),
    ("human", "metal", "blacksmith"),
    ("human", "milk", "cook"),
    ("human", "mountain", "climber"),
    ("human", "paper", "writer"),
    ("human", "plant", "gardener"),
    ("human", "plastic", "toy"),
    ("human", "rain", "umbrella"),
    ("human", "river", "fisherman"),
    ("human", "rock", "miner"),
    ("human", "sand", "castle"),
    ("human", "seed", "farmer"),
    ("human", "snow", "snowman"),
    ("human", "stone", "builder"),
    ("human", "storm", "fear"),
    ("human", "sun", "sunburn"),
    ("human", "tree", "woodcutter"),
    ("human", "water", "swimmer"),
    ("human", "wind", "kite"),
    ("ice", "metal", "cold-steel"),
    ("ice", "rock", "glacier"),
    ("ice", "water", "snow"),
    ("lava", "stone", "obsidian"),
    ("lava", "water", "stone"),
    ("light", "metal", "reflection"),
    ("metal", "pressure", "steel"),
    ("metal", "water", "rust"),
    ("milk", "water", "diluted-milk"),
    ("mist", "sun", "rainbow"),
    ("moon", "night", "dream"),
    ("mountain", "snow", "peak"),
    ("mud", "plant", "swamp"),
    ("paper", "water", "pulp"),
    ("plant", "rain", "growth"),
    ("plant", "sun", "photosynthesis"),
    ("plant", "water", "algae"),
    ("plastic", "water", "bottle"),
    ("rain", "sun", "rainbow"),
    ("river", "stone", "pebble"),
    ("rock", "water", "erosion"),
    ("sand", "water", "beach"),
    ("seed", "water", "sprout"),
    ("snow", "water", "slush"),
    ("steam", "stone", "geyser"),
    ("stone", "water", "erosion"),
    ("sun", "water", "rain"),
    ("tree", "water", "swamp"),
    ("volcano", "water", "island"),
];
