//! Embedded browser client for the doodle board.
//!
//! The three assets below are the whole front end: a page shell with the
//! board chrome, the tile controller script, and the workshop stylesheet.
//! They are compiled into the binary and served by [`crate::server`], so the
//! board runs from a single executable with no asset directory.

/// The board page. Declares the tile container plus the board-wide
/// generate-all button and status line the controller script wires up.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Crazy 8s Trend Doodles</title>
    <link rel="stylesheet" href="style.css" />
  </head>
  <body>
    <header class="app-header">
      <div class="app-intro">
        <h1>Crazy 8s Trend Doodles</h1>
        <p class="subtitle">
          Eight tiles, eight trends. Describe each one, generate a playful SVG
          doodle, then drag or download it into your Miro board.
        </p>
      </div>
      <div class="global-actions">
        <button id="generate-all">
          <span class="icon">⚡</span>
          <span>Generate all</span>
        </button>
        <span id="global-status"></span>
      </div>
    </header>

    <main id="tiles" class="tiles"></main>

    <script src="app.js"></script>
  </body>
</html>
"##;

/// The tile controller. One closure per tile owns that tile's inputs, status
/// line, and last image URL; the generate-all handler walks the tiles
/// strictly in sequence.
pub const APP_JS: &str = r##"const NUM_TILES = 8;

const tilesContainer = document.getElementById("tiles");
const generateAllBtn = document.getElementById("generate-all");
const globalStatusEl = document.getElementById("global-status");

const tilesState = [];

function createTile(index) {
  const tileId = `tile-${index}`;
  const wrapper = document.createElement("article");
  wrapper.className = "tile";
  wrapper.dataset.index = index;

  wrapper.innerHTML = `
    <header class="tile-header">
      <div class="tile-label">Trend</div>
      <div class="tile-number">#${index + 1}</div>
    </header>

    <input
      type="text"
      class="trend-title"
      placeholder="e.g. AI co-pilots in every workflow"
    />

    <textarea
      class="trend-prompt"
      placeholder="Describe this trend so an image model can visualize it…"
    ></textarea>

    <div class="tile-actions">
      <button class="generate-btn">
        <span class="icon">✨</span>
        <span>Generate</span>
      </button>
      <span class="tile-status"></span>
    </div>

    <div class="image-container">
      <div class="image-placeholder">
        AI image will appear here. Then drag or paste it into your Miro board.
      </div>
    </div>

    <div class="image-tools" style="display:none;">
      <button class="download-btn">
        <span class="icon">⬇️</span>
        <span>Download</span>
      </button>
      <button class="copy-url-btn">
        <span class="icon">🔗</span>
        <span>Copy URL</span>
      </button>
    </div>
  `;

  const generateBtn = wrapper.querySelector(".generate-btn");
  const titleInput = wrapper.querySelector(".trend-title");
  const promptInput = wrapper.querySelector(".trend-prompt");
  const statusEl = wrapper.querySelector(".tile-status");
  const imgContainer = wrapper.querySelector(".image-container");
  const imgTools = wrapper.querySelector(".image-tools");
  const downloadBtn = wrapper.querySelector(".download-btn");
  const copyUrlBtn = wrapper.querySelector(".copy-url-btn");

  let imageUrl = null;

  async function generateImage() {
    const title = titleInput.value.trim();
    const prompt = promptInput.value.trim();

    if (!title && !prompt) {
      statusEl.textContent = "Add at least a title or a prompt first.";
      statusEl.classList.remove("error");
      return;
    }

    const composedPrompt =
      prompt ||
      `A visual metaphor for the 2025 trend: ${title}. Stylized, clean, workshop-friendly illustration.`;

    generateBtn.disabled = true;
    generateBtn.querySelector("span.icon").textContent = "⏳";
    statusEl.textContent = "Generating image…";
    statusEl.classList.remove("error");

    try {
      const response = await fetch("/api/generate", {
        method: "POST",
        headers: {
          "Content-Type": "application/json"
        },
        body: JSON.stringify({ prompt: composedPrompt })
      });

      if (!response.ok) {
        const errorBody = await response.json().catch(() => ({}));
        throw new Error(
          errorBody?.error || `Request failed with ${response.status}`
        );
      }

      const data = await response.json();

      imageUrl = data.imageUrl;

      // Clear container and show image
      imgContainer.innerHTML = "";
      const img = document.createElement("img");

      // If the backend returned base64, it's already a data URL; otherwise it's a normal URL
      if (imageUrl.startsWith("data:image") || imageUrl.startsWith("http")) {
        img.src = imageUrl;
      } else {
        // fallback – assume it's a path or URL string
        img.src = imageUrl;
      }

      img.alt = title || "AI-generated image for trend";
      imgContainer.appendChild(img);

      imgTools.style.display = "flex";
      statusEl.textContent = "Done! Drag/download this into Miro.";
    } catch (err) {
      console.error(err);
      statusEl.textContent = "Error generating image. Try again.";
      statusEl.classList.add("error");
    } finally {
      generateBtn.disabled = false;
      generateBtn.querySelector("span.icon").textContent = "✨";
    }
  }

  generateBtn.addEventListener("click", generateImage);

  downloadBtn.addEventListener("click", () => {
    if (!imageUrl) return;
    const a = document.createElement("a");
    a.href = imageUrl;
    a.download = (titleInput.value || `trend-${index + 1}`) + ".png";
    document.body.appendChild(a);
    a.click();
    a.remove();
  });

  copyUrlBtn.addEventListener("click", async () => {
    if (!imageUrl || !navigator.clipboard) return;
    try {
      await navigator.clipboard.writeText(imageUrl);
      statusEl.textContent = "Image URL copied!";
      statusEl.classList.remove("error");
    } catch {
      statusEl.textContent = "Could not copy URL.";
      statusEl.classList.add("error");
    }
  });

  tilesState.push({ id: tileId, generateImage });

  return wrapper;
}

// Initialize tiles
for (let i = 0; i < NUM_TILES; i++) {
  tilesContainer.appendChild(createTile(i));
}

// Generate all remaining tiles
generateAllBtn.addEventListener("click", async () => {
  globalStatusEl.textContent = "Generating all tiles…";
  generateAllBtn.disabled = true;

  for (const tile of tilesState) {
    await tile.generateImage(); // simple sequential generation
  }

  globalStatusEl.textContent = "Finished generating all tiles.";
  generateAllBtn.disabled = false;
});
"##;

/// Workshop stylesheet: paper background, thick ink outlines, and the four
/// accent colors the doodles themselves use.
pub const STYLE_CSS: &str = r##":root {
  --paper: #f4e4c3;
  --ink: #0d1b2a;
  --orange: #e4572e;
  --yellow: #f5b42a;
  --teal: #4cb5ae;
  --purple: #6c4ab6;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  min-height: 100vh;
  background: var(--paper);
  color: var(--ink);
  font-family: "Comic Sans MS", "Segoe Print", "Chalkboard SE", cursive, sans-serif;
}

.app-header {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  justify-content: space-between;
  gap: 16px;
  padding: 28px 32px 12px;
  border-bottom: 4px solid var(--ink);
}

.app-header h1 {
  margin: 0;
  font-size: 2rem;
  letter-spacing: 0.5px;
}

.subtitle {
  margin: 6px 0 0;
  max-width: 46rem;
  font-size: 0.95rem;
}

.global-actions {
  display: flex;
  align-items: center;
  gap: 12px;
}

button {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 8px 14px;
  border: 3px solid var(--ink);
  border-radius: 12px;
  background: var(--yellow);
  color: var(--ink);
  font-family: inherit;
  font-size: 0.95rem;
  font-weight: bold;
  cursor: pointer;
  box-shadow: 3px 3px 0 var(--ink);
}

button:hover {
  transform: translate(-1px, -1px);
  box-shadow: 4px 4px 0 var(--ink);
}

button:disabled {
  opacity: 0.6;
  cursor: wait;
  transform: none;
  box-shadow: 3px 3px 0 var(--ink);
}

#generate-all {
  background: var(--orange);
  color: var(--paper);
}

#global-status {
  font-size: 0.9rem;
  min-height: 1.2em;
}

.tiles {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 20px;
  padding: 24px 32px 48px;
}

.tile {
  display: flex;
  flex-direction: column;
  gap: 10px;
  padding: 14px;
  border: 3px solid var(--ink);
  border-radius: 14px;
  background: rgba(255, 255, 255, 0.45);
  box-shadow: 5px 5px 0 rgba(13, 27, 42, 0.25);
}

.tile:nth-child(4n + 1) {
  transform: rotate(-0.6deg);
}

.tile:nth-child(4n + 3) {
  transform: rotate(0.5deg);
}

.tile-header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
}

.tile-label {
  text-transform: uppercase;
  font-size: 0.75rem;
  letter-spacing: 1.5px;
}

.tile-number {
  font-weight: bold;
  color: var(--purple);
}

.trend-title,
.trend-prompt {
  width: 100%;
  padding: 8px 10px;
  border: 2px solid var(--ink);
  border-radius: 8px;
  background: var(--paper);
  color: var(--ink);
  font-family: inherit;
  font-size: 0.9rem;
}

.trend-prompt {
  min-height: 64px;
  resize: vertical;
}

.tile-actions {
  display: flex;
  align-items: center;
  gap: 10px;
}

.generate-btn {
  background: var(--teal);
}

.tile-status {
  font-size: 0.8rem;
  min-height: 1.1em;
}

.tile-status.error {
  color: var(--orange);
  font-weight: bold;
}

.image-container {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 170px;
  border: 2px dashed var(--ink);
  border-radius: 10px;
  background: rgba(255, 255, 255, 0.35);
  overflow: hidden;
}

.image-container img {
  display: block;
  max-width: 100%;
  height: auto;
}

.image-placeholder {
  padding: 16px;
  font-size: 0.8rem;
  text-align: center;
  opacity: 0.65;
}

.image-tools {
  display: flex;
  gap: 10px;
}

.download-btn,
.copy-url-btn {
  font-size: 0.8rem;
  padding: 6px 10px;
  background: var(--paper);
}
"##;
