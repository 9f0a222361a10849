//! Keyword dictionaries for prompt highlighting
//!
//! Literal phrases matched case-insensitively on word boundaries. Order within
//! a list matters: the compiled alternation prefers earlier phrases when two
//! start at the same position.

use crate::category::Category;

/// Per-category keyword lists
pub struct PromptKeywords;

impl PromptKeywords {
    /// Keyword list for a category (empty for `Comment`)
    pub fn for_category(category: Category) -> &'static [&'static str] {
        match category {
            Category::Subject => SUBJECT,
            Category::Style => STYLE,
            Category::Lighting => LIGHTING,
            Category::Camera => CAMERA,
            Category::Quality => QUALITY,
            Category::Color => COLOR,
            Category::Emotion => EMOTION,
            Category::Setting => SETTING,
            Category::Comment => &[],
        }
    }

    /// First category (in claim order) whose list contains `word` exactly,
    /// compared case-insensitively
    pub fn lookup(word: &str) -> Option<Category> {
        crate::category::KEYWORD_PASS_ORDER
            .iter()
            .copied()
            .find(|&category| {
                Self::for_category(category)
                    .iter()
                    .any(|keyword| keyword.to_lowercase() == word)
            })
    }
}

#[rustfmt::skip]
const SUBJECT: &[&str] = &[
    // People
    "woman", "man", "person", "character", "girl", "boy", "child", "baby", "teen", "teenager",
    "adult", "elderly", "old", "young", "model", "portrait", "face", "people", "human", "figure",
    "lady", "gentleman", "male", "female", "mother", "father", "sister", "brother", "family",
    // Professions
    "warrior", "knight", "wizard", "mage", "soldier", "doctor", "nurse", "teacher", "artist",
    "musician", "dancer", "chef", "pilot", "captain", "prince", "princess", "king", "queen",
    "hero", "villain", "assassin", "thief", "merchant", "blacksmith", "monk", "priest",
    // Fantasy & sci-fi
    "elf", "dwarf", "orc", "dragon", "unicorn", "phoenix", "angel", "demon", "vampire", "witch",
    "zombie", "robot", "cyborg", "alien", "android", "mermaid", "fairy", "giant", "goblin",
    // Animals
    "cat", "dog", "wolf", "lion", "tiger", "bear", "eagle", "dragon", "horse", "deer",
    "fox", "rabbit", "bird", "fish", "shark", "whale", "elephant", "monkey", "snake",
    // Objects
    "sword", "shield", "armor", "crown", "ring", "necklace", "crystal", "gem", "treasure",
    "book", "scroll", "map", "key", "door", "window", "mirror", "painting", "statue",
    "paperclip", "jacket", "collar", "zipper", "pattern", "surface", "finish", "cigarette",
    "whiskey", "smoke", "eyebrows", "figures",
    // Physical descriptions & details
    "middle-aged", "sturdy", "build", "deep-set", "eyes", "broad", "nose", "full", "beard",
    "rounded", "jawline", "tanned", "tone", "smooth", "texture", "dark", "brown", "hair",
    "slight", "wave", "loose-fitting", "short-sleeved", "hawaiian", "shirt", "beige", "base",
    "palm", "leaf", "patterns", "khaki", "pants", "contemplative", "introspection",
    "mild", "concern", "distinctive", "feature", "bright", "red", "button", "facial",
    "features", "skin", "tones",
];

#[rustfmt::skip]
const STYLE: &[&str] = &[
    // Art styles
    "cinematic", "photorealistic", "hyperrealistic", "realistic", "anime", "manga", "cartoon",
    "comic", "illustration", "digital art", "concept art", "matte painting", "oil painting",
    "watercolor", "acrylic", "pastel", "sketch", "drawing", "pencil", "charcoal", "ink",
    "luxurious", "sophisticated", "high-fashion", "avant-garde", "structured", "textured",
    // 3D & render
    "3D render", "3D", "rendered", "CGI", "blender", "maya", "octane render", "unreal engine",
    "unity", "raytracing", "subsurface scattering", "volumetric", "procedural",
    // Photography
    "photography", "photo", "portrait photography", "landscape photography", "macro photography",
    "street photography", "film photography", "polaroid", "vintage", "retro", "noir",
    // Art movements
    "impressionist", "expressionist", "surreal", "abstract", "minimalist", "baroque", "renaissance",
    "art nouveau", "art deco", "pop art", "cubist", "futuristic", "steampunk", "cyberpunk",
    "dieselpunk", "gothic", "victorian", "medieval", "ancient", "modern", "contemporary",
    // Photography & professional styles
    "movie-quality", "film", "grain", "cinematography", "hollywood-style", "epic", "visuals",
    "vintage", "style", "retro", "aesthetic", "classic", "nostalgic", "mood", "timeless",
    "appeal", "aged", "patina", "minimalist", "clean", "simple", "elegance", "uncluttered",
    "sophisticated", "dramatic", "intense", "powerful", "bold", "contrasts", "striking",
    "elegant", "refined", "aesthetics", "luxury", "high-end", "premium", "quality",
    "tasteful", "design", "fashion", "modeling", "studio", "magazine-worthy", "artistic",
    "creative", "fine", "art", "unique", "perspective", "professional", "artistry",
    "film emulation", "kodak", "fuji", "portra", "ektar", "vision3",
    "gallery-worthy", "expressive", "lifelike", "perfect", "details",
];

#[rustfmt::skip]
const LIGHTING: &[&str] = &[
    // Time of day
    "golden hour", "blue hour", "sunrise", "sunset", "dawn", "dusk", "midday", "noon",
    "midnight", "twilight", "evening", "morning", "night", "day",
    // Light types
    "soft light", "hard light", "natural light", "artificial light", "candlelight", "firelight",
    "neon light", "LED", "fluorescent", "incandescent", "spotlight", "flashlight", "torch",
    "moonlight", "starlight", "backlight", "key light", "fill light", "rim light", "practical lights",
    // Light qualities
    "dramatic lighting", "moody lighting", "ambient lighting", "volumetric lighting",
    "rim lighting", "back lighting", "side lighting", "front lighting", "top lighting",
    "under lighting", "bounce lighting", "fill lighting", "key lighting", "moody",
    "shadowy", "atmosphere", "even", "accentuating",
    // Effects
    "lens flare", "light rays", "god rays", "sunbeams", "shadows", "silhouette",
    "chiaroscuro", "high contrast", "low contrast", "bright", "dark", "dim", "glowing",
    "luminous", "radiant", "shimmering", "sparkling", "twinkling",
    // Professional lighting terms
    "desk", "lamp", "gentle", "shadows", "cozy", "atmosphere", "subtle", "highlights",
    "daylight", "organic", "illumination", "controlled", "exposure", "commercial",
    "movie-style", "sunset", "glow", "magical", "hour", "deep", "blue", "sky",
    "evening", "serene", "ambiance", "intense", "diffused", "flattering", "backlit",
    "silhouette", "effect", "colorful", "urban", "night", "scene", "futuristic",
    "beams", "rays", "professional", "setup", "perfect", "quality", "film-quality",
    // Cinematic setups
    "noir lighting", "high key", "low key", "rembrandt lighting", "split lighting", "butterfly lighting",
    "three-point lighting", "studio strobe", "softbox", "beauty dish", "gridded light", "practical neon",
];

#[rustfmt::skip]
const CAMERA: &[&str] = &[
    // Shot types
    "close-up", "extreme close-up", "medium shot", "long shot", "wide shot", "extreme wide shot",
    "full body", "half body", "head shot", "portrait", "headshot", "bust shot",
    "cowboy shot", "over the shoulder", "OTS", "two-shot", "establishing shot", "insert shot",
    // Angles
    "low angle", "high angle", "bird's eye view", "worm's eye view", "eye level", "dutch angle",
    "tilted", "aerial view", "overhead", "top down", "side view", "front view", "back view",
    // Lens types
    "macro", "telephoto", "wide angle", "fisheye", "tilt-shift", "prime lens", "zoom lens",
    "35mm", "50mm", "85mm", "24mm", "135mm", "200mm",
    // Camera settings
    "shallow depth of field", "deep depth of field", "bokeh", "sharp focus", "soft focus",
    "motion blur", "freeze motion", "long exposure", "double exposure", "multiple exposure",
    // Composition
    "rule of thirds", "centered", "symmetrical", "asymmetrical", "diagonal", "vertical",
    "horizontal", "panoramic", "square format", "portrait orientation", "landscape orientation",
    // Advanced camera & composition terms
    "medium", "angle", "profile", "waist", "up", "positioned", "slightly", "left",
    "providing", "side", "emphasizes", "confines", "tilted", "composition", "dynamic",
    "framing", "intimate", "intricate", "details", "vast", "landscape", "epic", "scenery",
    "professional", "headshot", "studio", "lighting", "sharp", "focus", "beautiful",
    "detailed", "creative", "artistic", "perspective", "stunning", "texture", "resolution",
    "scale", "dramatic", "capturing", "seated", "positioned",
    // Movements
    "pan", "tilt", "dolly", "truck", "arc", "crane", "steadicam", "handheld", "gimbal", "zoom",
    "crash zoom", "whip pan",
];

#[rustfmt::skip]
const QUALITY: &[&str] = &[
    // Resolution
    "4K", "8K", "2K", "HD", "Full HD", "Ultra HD", "high resolution", "low resolution",
    "pixel perfect", "crisp", "sharp", "detailed", "ultra detailed", "highly detailed",
    // Quality terms
    "masterpiece", "best quality", "high quality", "professional", "award winning",
    "trending on artstation", "featured on behance", "viral", "popular", "famous",
    "iconic", "legendary", "epic", "stunning", "breathtaking", "gorgeous", "beautiful",
    "amazing", "incredible", "fantastic", "wonderful", "perfect", "flawless",
    "super", "extreme", "large", "expressive", "arched", "luxurious", "rich",
    // Technical
    "anti-aliasing", "ray tracing", "global illumination", "ambient occlusion",
    "subsurface scattering", "caustics", "chromatic aberration", "film grain", "noise",
    "clean", "smooth", "polished", "refined", "optimized", "glossy", "shiny", "textured",
    "embossed", "cropped", "reflects", "highlights", "visual interest",
    // Professional quality & technical terms
    "expert", "technique", "equipment", "crystal", "clear", "pristine", "image",
    "beautiful", "bokeh", "shallow", "depth", "field", "lens", "artistic", "blur",
    "background", "separation", "dreamy", "tack", "sharpness", "detail", "clarity",
    "commercial", "magazine", "worthy", "gallery", "award", "winning",
];

#[rustfmt::skip]
const COLOR: &[&str] = &[
    // Basic colors
    "red", "blue", "green", "yellow", "orange", "purple", "pink", "brown", "black", "white",
    "gray", "grey", "silver", "gold", "bronze", "copper", "platinum", "burgundy", "neutral",
    // Color qualities
    "vibrant", "vivid", "bright", "dark", "light", "pale", "deep", "rich", "saturated",
    "desaturated", "muted", "subtle", "bold", "intense", "soft", "warm", "cool",
    "monochrome", "black and white", "sepia", "colorful", "multicolored", "rainbow",
    // Color schemes
    "complementary colors", "analogous colors", "triadic", "split complementary",
    "tetradic", "monochromatic", "neutral colors", "earth tones", "pastel colors",
    "neon colors", "metallic", "iridescent", "holographic", "pearlescent",
];

#[rustfmt::skip]
const EMOTION: &[&str] = &[
    // Positive
    "happy", "joyful", "cheerful", "smiling", "laughing", "excited", "enthusiastic",
    "confident", "proud", "peaceful", "calm", "serene", "content", "satisfied",
    "hopeful", "optimistic", "loving", "caring", "gentle", "kind", "friendly",
    // Negative
    "sad", "crying", "depressed", "melancholic", "angry", "furious", "mad", "upset",
    "frustrated", "annoyed", "scared", "frightened", "terrified", "worried", "anxious",
    "stressed", "tired", "exhausted", "bored", "lonely", "isolated", "disappointment",
    "despair", "weariness", "somber", "profound",
    // Neutral & complex
    "mysterious", "enigmatic", "thoughtful", "contemplative", "serious", "stern",
    "determined", "focused", "intense", "passionate", "romantic", "seductive",
    "playful", "mischievous", "curious", "surprised", "shocked", "amazed",
    // Contemplative
    "introspective", "quiet", "moment", "essence", "capturing",
];

#[rustfmt::skip]
const SETTING: &[&str] = &[
    // Natural
    "forest", "mountain", "desert", "beach", "ocean", "lake", "river", "waterfall",
    "cave", "valley", "hill", "meadow", "field", "garden", "jungle", "swamp",
    "tundra", "glacier", "volcano", "canyon", "cliff", "island", "plains", "savanna",
    // Urban
    "city", "town", "village", "street", "alley", "building", "skyscraper", "house",
    "apartment", "office", "store", "restaurant", "cafe", "bar", "club", "theater",
    "museum", "library", "school", "hospital", "church", "temple", "mosque",
    // Indoor
    "room", "bedroom", "living room", "kitchen", "bathroom", "basement", "attic",
    "hallway", "stairs", "balcony", "window", "door", "fireplace", "couch", "bed",
    // Fantasy & sci-fi
    "castle", "palace", "tower", "dungeon", "spaceship", "space station", "alien world",
    "futuristic city", "cyberpunk city", "steampunk", "medieval", "ancient ruins",
    "magical forest", "enchanted", "mystical", "otherworldly", "dimensional",
    "scene", "background", "atmosphere",
    // Office & everyday environments
    "cubicle", "desk", "office", "fabric", "walls", "pinned", "notes", "papers",
    "potted", "plant", "greenery", "ordinary", "space", "routine", "everyday", "life",
    "neutral-colored", "adorned", "touch", "setting", "typical", "context",
    "mundane", "workday",
];
