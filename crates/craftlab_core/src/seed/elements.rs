//! Base catalog table: every element available before any discovery.
//!
//! `(id, name, icon)` rows. Ids here must stay slug-shaped and unique
//! (covered by seed tests).

pub(crate) const SEED_ELEMENTS: &[(&str, &str, &str)] = &[
    ("water", "Water", "💧"),
    ("fire", "Fire", "🔥"),
    ("earth", "Earth", "🌍"),
    ("air", "Air", "💨"),
    ("ash", "Ash", "⚱️"),
    ("bacteria", "Bacteria", "🦠"),
    ("beach", "Beach", "🏖️"),
    ("bee", "Bee", "🐝"),
    ("bird", "Bird", "🐦"),
    ("boat", "Boat", "⛵"),
    ("brick", "Brick", "🧱"),
    ("car", "Car", "🚗"),
    ("carbon", "Carbon", "💎"),
    ("cat", "Cat", "🐱"),
    ("charcoal", "Charcoal", "⬛"),
    ("cheese", "Cheese", "🧀"),
    ("cloud", "Cloud", "☁️"),
    ("coal", "Coal", "🕳️"),
    ("computer", "Computer", "💻"),
    ("cow", "Cow", "🐄"),
    ("crystal", "Crystal", "🔮"),
    ("desert", "Desert", "🌵"),
    ("dirt", "Dirt", "🟫"),
    ("dog", "Dog", "🐶"),
    ("dragon", "Dragon", "🐉"),
    ("electricity", "Electricity", "⚡"),
    ("energy", "Energy", "🔋"),
    ("fish", "Fish", "🐟"),
    ("flower", "Flower", "🌸"),
    ("forest", "Forest", "🌲"),
    ("glass", "Glass", "🥃"),
    ("gold", "Gold", "💰"),
    ("grass", "Grass", "🌱"),
    ("heat", "Heat", "🔥"),
    ("human", "Human", "🧑"),
    ("ice", "Ice", "🧊"),
    ("lava", "Lava", "🌋"),
    ("light", "Light", "💡"),
    ("metal", "Metal", "🛡️"),
    ("milk", "Milk", "🥛"),
    ("mist", "Mist", "🌫️"),
    ("moon", "Moon", "🌙"),
    ("mountain", "Mountain", "🏔️"),
    ("mud", "Mud", "💩"),
    ("paper", "Paper", "📄"),
    ("plant", "Plant", "🌿"),
    ("plastic", "Plastic", "🥤"),
    ("rain", "Rain", "🌧️"),
    ("river", "River", "🌊"),
    ("rock", "Rock", "🪨"),
    ("sand", "Sand", "🏖️"),
    ("seed", "Seed", "🌱"),
    ("shadow", "Shadow", "👤"),
    ("sky", "Sky", "🌤️"),
    ("smoke", "Smoke", "💨"),
    ("snow", "Snow", "❄️"),
    ("soil", "Soil", "🌱"),
    ("sound", "Sound", "🔊"),
    ("steam", "Steam", "💨"),
    ("stone", "Stone", "🪨"),
    ("storm", "Storm", "⛈️"),
    ("sun", "Sun", "☀️"),
    ("swamp", "Swamp", "🐊"),
    ("tree", "Tree", "🌳"),
    ("volcano", "Volcano", "🌋"),
    ("wave", "Wave", "🌊"),
    ("wind", "Wind", "🌬️"),
    ("wood", "Wood", "🪵"),
    ("soot", "Soot", "🌑"),
    ("infection", "Infection", "🤢"),
    ("sandstorm", "Sandstorm", "🌪️"),
    ("swarm", "Swarm", "🐝"),
    ("flight", "Flight", "✈️"),
    ("sail", "Sail", "⛵"),
    ("co2", "CO2", "☁️"),
    ("fur", "Fur", "🐾"),
    ("smell", "Smell", "👃"),
    ("fan", "Fan", "🌀"),
    ("milkshake", "Milkshake", "🥤"),
    ("shine", "Shine", "✨"),
    ("hay", "Hay", "🌾"),
    ("warmth", "Warmth", "🌡️"),
    ("breath", "Breath", "🌬️"),
    ("sparkle", "Sparkle", "✨"),
    ("obsidian", "Obsidian", "💎"),
    ("flutter", "Flutter", "🦋"),
    ("glow", "Glow", "🌟"),
    ("rust", "Rust", "🔩"),
    ("foam", "Foam", "🫧"),
    ("fog", "Fog", "🌫️"),
    ("night", "Night", "🌃"),
    ("clay", "Clay", "🏺"),
    ("kite", "Kite", "🪁"),
    ("bag", "Bag", "🛍️"),
    ("pollution", "Pollution", "🏭"),
    ("blizzard", "Blizzard", "❄️"),
    ("echo", "Echo", "📣"),
    ("darkness", "Darkness", "🌑"),
    ("atmosphere", "Atmosphere", "🌎"),
    ("hurricane", "Hurricane", "🌀"),
    ("day", "Day", "☀️"),
    ("mosquito", "Mosquito", "🦟"),
    ("leaves", "Leaves", "🍃"),
    ("eruption", "Eruption", "🌋"),
    ("spray", "Spray", "🚿"),
    ("gust", "Gust", "💨"),
    ("sawdust", "Sawdust", "🪵"),
    ("fertilizer", "Fertilizer", "💩"),
    ("illness", "Illness", "🤒"),
    ("plankton", "Plankton", "🔬"),
    ("shore", "Shore", "🏖️"),
    ("honey", "Honey", "🍯"),
    ("hive", "Hive", "🐝"),
    ("nest", "Nest", "🪺"),
    ("steamship", "Steamship", "🚢"),
    ("ship", "Ship", "🚢"),
    ("sailboat", "Sailboat", "⛵"),
    ("ceramic", "Ceramic", "🏺"),
    ("ev", "EV", "⚡"),
    ("vehicle", "Vehicle", "🚗"),
    ("engine", "Engine", "⚙️"),
    ("diamond", "Diamond", "💎"),
    ("kitten", "Kitten", "🐱"),
    ("forge", "Forge", "🔥"),
    ("sandwich", "Sandwich", "🥪"),
    ("sunset", "Sunset", "🌅"),
    ("cow-wash", "Cow Wash", "🚿"),
    ("prism", "Prism", "🌈"),
    ("oasis", "Oasis", "🌴"),
    ("friend", "Friend", "🤝"),
    ("dragonfire", "Dragonfire", "🔥"),
    ("hoard", "Hoard", "💰"),
    ("earthquake", "Earthquake", "🫨"),
    ("field", "Field", "🌾"),
    ("glacier", "Glacier", "🧊"),
    ("ore", "Ore", "🪨"),
    ("geyser", "Geyser", "⛲"),
    ("power", "Power", "🔌"),
    ("plasma", "Plasma", "🔮"),
    ("lightbulb", "Lightbulb", "💡"),
    ("wire", "Wire", "🔌"),
    ("shock", "Shock", "⚡"),
    ("magnet", "Magnet", "🧲"),
    ("cooked-fish", "Cooked Fish", "🍳"),
    ("scent", "Scent", "👃"),
    ("wildfire", "Wildfire", "🔥"),
    ("molten-glass", "Molten Glass", "🔥"),
    ("inferno", "Inferno", "🔥"),
    ("tool", "Tool", "🔨"),
    ("hot-chocolate", "Hot Chocolate", "☕"),
    ("magma", "Magma", "🔥"),
    ("popcorn", "Popcorn", "🍿"),
    ("pressure", "Pressure", "😤"),
    ("solar-flare", "Solar Flare", "☀️"),
    ("school", "School", "🏫"),
    ("garden", "Garden", "🏡"),
    ("time", "Time", "⏳"),
    ("sailor", "Sailor", "⚓"),
    ("driver", "Driver", "🏎️"),
    ("owner", "Owner", "👤"),
    ("chef", "Chef", "👨‍🍳"),
    ("programmer", "Programmer", "👨‍💻"),
    ("farmer", "Farmer", "👨‍🌾"),
    ("engineer", "Engineer", "👷"),
    ("fisherman", "Fisherman", "🎣"),
    ("gardener", "Gardener", "👨‍🌾"),
    ("lumberjack", "Lumberjack", "🪓"),
    ("glasses", "Glasses", "👓"),
    ("wealth", "Wealth", "💰"),
    ("skater", "Skater", "⛸️"),
    ("danger", "Danger", "⚠️"),
    ("blacksmith", "Blacksmith", "🔨"),
    ("cook", "Cook", "🍳"),
    ("climber", "Climber", "🧗"),
    ("writer", "Writer", "✍️"),
    ("toy", "Toy", "🧸"),
    ("umbrella", "Umbrella", "☂️"),
    ("miner", "Miner", "👷"),
    ("castle", "Castle", "🏰"),
    ("snowman", "Snowman", "☃️"),
    ("builder", "Builder", "👷"),
    ("fear", "Fear", "😨"),
    ("sunburn", "Sunburn", "🥵"),
    ("woodcutter", "Woodcutter", "🪓"),
    ("swimmer", "Swimmer", "🏊"),
    ("cold-steel", "Cold Steel", "❄️"),
    ("reflection", "Reflection", "🪞"),
    ("steel", "Steel", "🔩"),
    ("diluted-milk", "Diluted Milk", "🥛"),
    ("rainbow", "Rainbow", "🌈"),
    ("dream", "Dream", "💤"),
    ("peak", "Peak", "🏔️"),
    ("pulp", "Pulp", "📄"),
    ("growth", "Growth", "🌱"),
    ("photosynthesis", "Photosynthesis", "☀️"),
    ("bottle", "Bottle", "🍾"),
    ("pebble", "Pebble", "🪨"),
    ("erosion", "Erosion", "⌛"),
    ("sprout", "Sprout", "🌱"),
    ("slush", "Slush", "❄️"),
    ("island", "Island", "🏝️"),
];
